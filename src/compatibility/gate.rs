//! Addition gate

use std::num::NonZeroU32;

use crate::{
    builds::Build,
    catalog::PartLookup,
    parts::{Part, PartSpec},
};

use super::{ConstraintViolation, Issue, Selection, rules};

/// Check whether `candidate` may join `build` in the given quantity.
///
/// Rules run in priority order and the first conflict wins: single instance, socket, memory
/// type, form factor, GPU clearance, then the power budget. Every conflict refuses the candidate,
/// including clearance, which full evaluation only warns about. Existing items the lookup cannot
/// resolve are treated as unknown.
///
/// # Errors
///
/// Returns a [`ConstraintViolation`] naming the candidate's category and the first conflict.
pub fn check_addition(
    build: &Build,
    candidate: &Part,
    quantity: NonZeroU32,
    catalog: &impl PartLookup,
) -> Result<(), ConstraintViolation> {
    let mut existing = Selection::default();

    for item in build.iter() {
        if let Some(part) = catalog.part(item.part) {
            existing.push(part, item.quantity.get());
        }
    }

    let category = candidate.category();
    let present = build.items_in(category).count();

    let first = rules::single_instance(category, present + 1)
        .or_else(|| pairings(&existing, &candidate.spec))
        .or_else(|| power(&existing, candidate, quantity));

    match first {
        Some(issue) => Err(ConstraintViolation {
            category,
            conflict: issue.conflict,
        }),
        None => Ok(()),
    }
}

/// Rules pairing the candidate with parts already in the build.
fn pairings(existing: &Selection<'_>, candidate: &PartSpec) -> Option<Issue> {
    match candidate {
        PartSpec::Cpu(cpu) => existing
            .first(PartSpec::as_motherboard)
            .and_then(|board| rules::socket(cpu, board)),
        PartSpec::Motherboard(board) => existing
            .first(PartSpec::as_cpu)
            .and_then(|cpu| rules::socket(cpu, board))
            .or_else(|| {
                existing
                    .first(PartSpec::as_case)
                    .and_then(|case| rules::form_factor(board, case))
            }),
        PartSpec::Ram(ram) => existing
            .first(PartSpec::as_motherboard)
            .and_then(|board| rules::memory_type(ram, board)),
        PartSpec::Gpu(gpu) => existing
            .first(PartSpec::as_case)
            .and_then(|case| rules::gpu_clearance(gpu, case)),
        PartSpec::Psu(_) | PartSpec::Case(_) | PartSpec::Storage(_) | PartSpec::Cooler(_) => None,
    }
}

/// Power budget over the build as it would be with the candidate added. Only PSU, CPU and GPU
/// candidates trigger it.
fn power<'a>(
    existing: &Selection<'a>,
    candidate: &'a Part,
    quantity: NonZeroU32,
) -> Option<Issue> {
    if !matches!(
        candidate.spec,
        PartSpec::Psu(_) | PartSpec::Cpu(_) | PartSpec::Gpu(_)
    ) {
        return None;
    }

    let mut hypothetical = Selection {
        items: existing.items.clone(),
    };

    hypothetical.push(candidate, quantity.get());

    let psu = hypothetical.first(PartSpec::as_psu)?;

    rules::power_budget(psu, hypothetical.draw())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        builds::{BuildItem, UserUuid},
        catalog::Catalog,
        compatibility::{Conflict, Rule},
        parts::{
            CaseSpec, CpuSpec, GpuSpec, MotherboardSpec, PartCategory, PsuSpec, RamSpec,
            StorageSpec, SupportedFormFactors,
        },
    };

    use super::*;

    fn cpu(socket: &str, watts: u32) -> Part {
        Part::new(
            format!("{socket} CPU"),
            Decimal::from(20_000),
            PartSpec::Cpu(CpuSpec {
                socket: Some(socket.to_string()),
                cores: Some(8),
                draw_watts: Some(watts),
            }),
        )
    }

    fn board(socket: &str, memory: &str, form_factor: &str) -> Part {
        Part::new(
            format!("{socket} board"),
            Decimal::from(15_000),
            PartSpec::Motherboard(MotherboardSpec {
                socket: Some(socket.to_string()),
                memory_type: Some(memory.to_string()),
                form_factor: Some(form_factor.to_string()),
                max_memory_speed_mhz: None,
            }),
        )
    }

    fn ram(memory: &str) -> Part {
        Part::new(
            format!("{memory} kit"),
            Decimal::from(5_000),
            PartSpec::Ram(RamSpec {
                memory_type: Some(memory.to_string()),
                speed_mhz: None,
            }),
        )
    }

    fn gpu(length_mm: u32, watts: u32) -> Part {
        Part::new(
            "Graphics card",
            Decimal::from(50_000),
            PartSpec::Gpu(GpuSpec {
                length_mm: Some(Decimal::from(length_mm)),
                draw_watts: Some(watts),
            }),
        )
    }

    fn psu(wattage: u32) -> Part {
        Part::new(
            format!("{wattage}W PSU"),
            Decimal::from(6_000),
            PartSpec::Psu(PsuSpec {
                wattage: Some(wattage),
            }),
        )
    }

    fn case(form_factors: &str, clearance_mm: u32) -> Part {
        Part::new(
            "Mid tower",
            Decimal::from(7_000),
            PartSpec::Case(CaseSpec {
                form_factors: Some(SupportedFormFactors::new(form_factors)),
                max_gpu_length_mm: Some(Decimal::from(clearance_mm)),
            }),
        )
    }

    /// A build holding one of each given part, plus a catalog resolving them.
    fn seeded(parts: &[Part]) -> (Build, Catalog) {
        let build = Build::with_items(
            UserUuid::new(),
            parts.iter().map(BuildItem::of).collect::<Vec<_>>(),
        );

        (build, parts.iter().cloned().collect())
    }

    fn check(build: &Build, candidate: &Part, catalog: &Catalog) -> Result<(), ConstraintViolation> {
        check_addition(build, candidate, NonZeroU32::MIN, catalog)
    }

    #[test]
    fn empty_build_accepts_anything() {
        let (build, catalog) = seeded(&[]);

        for part in [cpu("AM5", 120), ram("DDR5"), gpu(340, 300), psu(300), case("ATX", 300)] {
            assert_eq!(check(&build, &part, &catalog), Ok(()), "refused {}", part.name);
        }
    }

    #[test]
    fn second_single_instance_part_always_fails() {
        for (first, second) in [
            (cpu("AM5", 65), cpu("AM5", 65)),
            (board("AM5", "DDR5", "ATX"), board("AM5", "DDR5", "ATX")),
            (gpu(200, 100), gpu(200, 100)),
            (psu(1_000), psu(1_000)),
            (case("ATX", 400), case("ATX", 400)),
        ] {
            let (build, catalog) = seeded(std::slice::from_ref(&first));

            let result = check(&build, &second, &catalog);

            assert!(
                matches!(
                    result,
                    Err(ConstraintViolation {
                        conflict: Conflict::DuplicateCategory { count: 2, .. },
                        ..
                    })
                ),
                "expected DuplicateCategory, got {result:?}"
            );
        }
    }

    #[test]
    fn multi_instance_categories_stack() {
        let storage = Part::new("NVMe", Decimal::from(4_000), PartSpec::Storage(StorageSpec::default()));
        let (build, catalog) = seeded(&[ram("DDR5"), storage.clone()]);

        assert_eq!(check(&build, &ram("DDR5"), &catalog), Ok(()));
        assert_eq!(check(&build, &storage, &catalog), Ok(()));
    }

    #[test]
    fn socket_mismatch_fails_either_way_round() {
        let (with_board, board_catalog) = seeded(&[board("AM5", "DDR5", "ATX")]);
        let (with_cpu, cpu_catalog) = seeded(&[cpu("LGA1700", 125)]);

        let cpu_first = check(&with_board, &cpu("LGA1700", 125), &board_catalog);
        let board_first = check(&with_cpu, &board("AM5", "DDR5", "ATX"), &cpu_catalog);

        assert_eq!(cpu_first.map_err(|violation| violation.rule()), Err(Rule::Socket));
        assert_eq!(board_first.map_err(|violation| violation.rule()), Err(Rule::Socket));
    }

    #[test]
    fn matching_sockets_pass() {
        let (build, catalog) = seeded(&[board("AM5", "DDR5", "ATX")]);

        assert_eq!(check(&build, &cpu("AM5", 105), &catalog), Ok(()));
    }

    #[test]
    fn ram_must_match_board_memory_type() {
        let (build, catalog) = seeded(&[board("AM5", "DDR5", "ATX")]);

        let result = check(&build, &ram("DDR4"), &catalog);

        assert_eq!(
            result,
            Err(ConstraintViolation {
                category: PartCategory::Ram,
                conflict: Conflict::MemoryTypeMismatch {
                    ram: "DDR4".to_string(),
                    motherboard: "DDR5".to_string(),
                },
            })
        );
    }

    #[test]
    fn board_must_fit_the_case() {
        let (build, catalog) = seeded(&[case("Micro-ATX, Mini-ITX", 330)]);

        let result = check(&build, &board("AM5", "DDR5", "ATX"), &catalog);

        assert_eq!(result.map_err(|violation| violation.rule()), Err(Rule::FormFactor));
    }

    #[test]
    fn board_socket_is_reported_before_form_factor() {
        let (build, catalog) = seeded(&[cpu("AM4", 65), case("Mini-ITX", 330)]);

        let result = check(&build, &board("AM5", "DDR5", "ATX"), &catalog);

        assert_eq!(result.map_err(|violation| violation.rule()), Err(Rule::Socket));
    }

    #[test]
    fn gpu_clearance_blocks_the_addition() {
        let (build, catalog) = seeded(&[case("ATX", 330)]);

        let result = check(&build, &gpu(340, 300), &catalog);

        assert_eq!(
            result,
            Err(ConstraintViolation {
                category: PartCategory::Gpu,
                conflict: Conflict::GpuClearance {
                    gpu_mm: Decimal::from(340),
                    clearance_mm: Decimal::from(330),
                },
            })
        );
    }

    #[test]
    fn board_and_case_scenario() {
        let (build, catalog) = seeded(&[board("AM5", "DDR5", "ATX"), case("ATX,Micro-ATX", 330)]);

        let refused = check(&build, &cpu("AM4", 65), &catalog);
        let message = refused.err().map(|violation| violation.to_string()).unwrap_or_default();

        assert!(message.contains("AM4"), "unexpected message: {message}");
        assert!(message.contains("AM5"), "unexpected message: {message}");
        assert_eq!(check(&build, &cpu("AM5", 65), &catalog), Ok(()));
    }

    #[test]
    fn power_budget_scenario() {
        let (build, catalog) = seeded(&[cpu("AM5", 120), gpu(300, 300)]);

        let result = check(&build, &psu(500), &catalog);

        assert_eq!(
            result,
            Err(ConstraintViolation {
                category: PartCategory::Psu,
                conflict: Conflict::PowerShortfall {
                    wattage: 500,
                    required: 504,
                    draw: 420,
                },
            })
        );
        assert_eq!(check(&build, &psu(550), &catalog), Ok(()));
    }

    #[test]
    fn power_hungry_candidate_checks_existing_psu() {
        let (build, catalog) = seeded(&[psu(500), cpu("AM5", 120)]);

        let result = check(&build, &gpu(300, 300), &catalog);

        assert_eq!(result.map_err(|violation| violation.rule()), Err(Rule::PowerBudget));
    }

    #[test]
    fn candidate_quantity_scales_its_draw() -> TestResult {
        let (build, catalog) = seeded(&[psu(300)]);
        let two = NonZeroU32::new(2).ok_or("zero")?;

        // 2 x 120 W = 240 W, needing 288 W.
        assert_eq!(check_addition(&build, &gpu(200, 120), NonZeroU32::MIN, &catalog), Ok(()));
        assert_eq!(check_addition(&build, &gpu(200, 120), two, &catalog), Ok(()));

        let hungrier = gpu(200, 130);

        assert_eq!(
            check_addition(&build, &hungrier, two, &catalog).map_err(|violation| violation.rule()),
            Err(Rule::PowerBudget)
        );

        Ok(())
    }

    #[test]
    fn power_budget_ignores_non_drawing_candidates() {
        let (build, catalog) = seeded(&[psu(100), cpu("AM5", 200)]);

        assert_eq!(check(&build, &ram("DDR5"), &catalog), Ok(()));
    }

    #[test]
    fn unresolved_items_are_unknown() {
        let missing = board("AM5", "DDR5", "ATX");
        let build = Build::with_items(UserUuid::new(), [BuildItem::of(&missing)]);

        assert_eq!(check(&build, &cpu("AM4", 65), &Catalog::new()), Ok(()));
    }

    #[test]
    fn unknown_attributes_pass() {
        let bare_board = Part::new(
            "Mystery board",
            Decimal::ZERO,
            PartSpec::Motherboard(MotherboardSpec::default()),
        );

        let (build, catalog) = seeded(&[bare_board]);

        assert_eq!(check(&build, &cpu("AM4", 65), &catalog), Ok(()));
        assert_eq!(check(&build, &ram("DDR3"), &catalog), Ok(()));
    }
}
