//! Rules
//!
//! Each rule looks at one pairing of parts and reports at most one issue. Unknown attributes on
//! either side mean the rule has nothing to say.

use crate::parts::{CaseSpec, CpuSpec, GpuSpec, MotherboardSpec, PartCategory, PsuSpec, RamSpec};

use super::{Conflict, Issue};

/// Percentage of the summed draw a PSU has to cover.
pub const HEADROOM_PERCENT: u64 = 120;

/// Wattage a PSU needs to cover `draw` watts with headroom, rounded up to a whole watt.
pub const fn required_wattage(draw: u64) -> u64 {
    draw.saturating_mul(HEADROOM_PERCENT).div_ceil(100)
}

/// A category selected more than once.
pub fn single_instance(category: PartCategory, count: usize) -> Option<Issue> {
    (category.is_single_instance() && count > 1)
        .then_some(Conflict::DuplicateCategory { category, count }.into())
}

/// CPU and motherboard sockets must be equal.
pub fn socket(cpu: &CpuSpec, board: &MotherboardSpec) -> Option<Issue> {
    let (cpu, motherboard) = (known(cpu.socket.as_ref())?, known(board.socket.as_ref())?);

    (cpu != motherboard).then(|| {
        Conflict::SocketMismatch {
            cpu: cpu.to_string(),
            motherboard: motherboard.to_string(),
        }
        .into()
    })
}

/// RAM and motherboard memory generations must be equal.
pub fn memory_type(ram: &RamSpec, board: &MotherboardSpec) -> Option<Issue> {
    let (ram, motherboard) = (
        known(ram.memory_type.as_ref())?,
        known(board.memory_type.as_ref())?,
    );

    (ram != motherboard).then(|| {
        Conflict::MemoryTypeMismatch {
            ram: ram.to_string(),
            motherboard: motherboard.to_string(),
        }
        .into()
    })
}

/// The case must list the motherboard's form factor.
pub fn form_factor(board: &MotherboardSpec, case: &CaseSpec) -> Option<Issue> {
    let motherboard = known(board.form_factor.as_ref())?;
    let supported = case.form_factors.as_ref().filter(|ff| !ff.is_empty())?;

    (!supported.supports(motherboard)).then(|| {
        Conflict::FormFactorUnsupported {
            motherboard: motherboard.to_string(),
            supported: supported.clone(),
        }
        .into()
    })
}

/// The graphics card must not be longer than the case clearance.
pub fn gpu_clearance(gpu: &GpuSpec, case: &CaseSpec) -> Option<Issue> {
    let (gpu_mm, clearance_mm) = (gpu.length_mm?, case.max_gpu_length_mm?);

    (gpu_mm > clearance_mm).then_some(
        Conflict::GpuClearance {
            gpu_mm,
            clearance_mm,
        }
        .into(),
    )
}

/// The PSU rating must cover the summed draw plus headroom. A PSU with an unknown rating passes.
pub fn power_budget(psu: &PsuSpec, draw: u64) -> Option<Issue> {
    let wattage = psu.wattage?;
    let required = required_wattage(draw);

    (u64::from(wattage) < required).then_some(
        Conflict::PowerShortfall {
            wattage,
            required,
            draw,
        }
        .into(),
    )
}

/// Blank attributes count as unknown.
fn known(value: Option<&String>) -> Option<&str> {
    value.map(|text| text.trim()).filter(|text| !text.is_empty())
}
