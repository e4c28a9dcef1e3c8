//! Integration tests for the demo catalog fixture and its seeded builds.
//!
//! - `balanced`: a compatible AM5 build, 348 W of draw on an 850 W supply.
//! - `oversized_gpu`: a 357.6 mm RTX 4090 in a case with 330 mm of clearance, which only warns.
//! - `mismatched`: leftover parts breaking every pairing rule at once.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use testresult::TestResult;

use rigcheck::{
    builds::{BuildItem, UserUuid},
    compatibility::{ReportStatus, Rule, Severity, check_addition, evaluate_build},
    fixtures::Fixture,
    hydration::hydrate,
    parts::PartCategory,
};

#[test]
fn test_demo_catalog_loads_every_category() -> TestResult {
    let fixture = Fixture::from_catalog("demo")?;

    assert_eq!(fixture.catalog().categories(), PartCategory::ALL.to_vec());
    assert_eq!(fixture.part("rtx-4090")?.price, Decimal::from(209_999));

    Ok(())
}

#[test]
fn test_balanced_build_is_compatible() -> TestResult {
    let fixture = Fixture::from_catalog("demo")?;
    let build = fixture.load_build("balanced", UserUuid::new())?;

    let hydrated = hydrate(build, fixture.catalog());

    assert_eq!(hydrated.build.name, "1440p gaming");
    assert_eq!(hydrated.compatibility.status, ReportStatus::Success);
    assert_eq!(hydrated.totals.count, 8);
    assert_eq!(hydrated.totals.units, 9);

    // 36,999 + 21,999 + 2 x 9,999 + 58,999 + 11,999 + 8,999 + 6,299 + 5,499
    assert_eq!(hydrated.totals.price, Decimal::from(170_791));
    assert_eq!(hydrated.totals.minor_units(), 17_079_100);

    Ok(())
}

#[test]
fn test_oversized_gpu_warns_in_full_evaluation() -> TestResult {
    let fixture = Fixture::from_catalog("demo")?;
    let build = fixture.load_build("oversized_gpu", UserUuid::new())?;

    let report = evaluate_build(&build, fixture.catalog());

    assert_eq!(report.status, ReportStatus::Warning);
    assert_eq!(report.issues.len(), 1);
    assert!(
        report
            .issues
            .iter()
            .all(|issue| issue.severity == Severity::Warning && issue.rule() == Rule::GpuClearance),
        "unexpected issues: {:?}",
        report.issues
    );

    Ok(())
}

#[test]
fn test_oversized_gpu_is_refused_by_the_gate() -> TestResult {
    let fixture = Fixture::from_catalog("demo")?;
    let build = fixture.build_of(UserUuid::new(), &["nr200p"])?;

    let result = check_addition(
        &build,
        fixture.part("rtx-4090")?,
        NonZeroU32::MIN,
        fixture.catalog(),
    );

    assert_eq!(result.map_err(|violation| violation.rule()), Err(Rule::GpuClearance));

    Ok(())
}

#[test]
fn test_mismatched_build_reports_every_rule() -> TestResult {
    let fixture = Fixture::from_catalog("demo")?;
    let build = fixture.load_build("mismatched", UserUuid::new())?;

    let report = evaluate_build(&build, fixture.catalog());
    let rules: Vec<_> = report.issues.iter().map(|issue| issue.rule()).collect();

    assert_eq!(report.status, ReportStatus::Error);
    assert_eq!(
        rules,
        vec![
            Rule::Socket,
            Rule::MemoryType,
            Rule::FormFactor,
            Rule::GpuClearance,
            Rule::PowerBudget,
        ]
    );

    Ok(())
}

#[test]
fn test_gated_assembly_of_the_balanced_build() -> TestResult {
    let fixture = Fixture::from_catalog("demo")?;
    let mut build = fixture.build_of(UserUuid::new(), &[])?;

    for key in [
        "h5-flow",
        "b650-tomahawk",
        "ryzen-7-7800x3d",
        "fury-ddr5-32",
        "rtx-4070-super",
        "rm850x",
    ] {
        let part = fixture.part(key)?;

        check_addition(&build, part, NonZeroU32::MIN, fixture.catalog())?;

        build.push(BuildItem::of(part));
    }

    assert_eq!(evaluate_build(&build, fixture.catalog()).status, ReportStatus::Success);

    let second_cpu = check_addition(
        &build,
        fixture.part("ryzen-5-7600")?,
        NonZeroU32::MIN,
        fixture.catalog(),
    );

    assert_eq!(second_cpu.map_err(|violation| violation.rule()), Err(Rule::SingleInstance));

    Ok(())
}
