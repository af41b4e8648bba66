use budget_buddy::core::services::{CategoryService, ServiceError};
use budget_buddy::domain::category::{
    all_groups, all_options, essential_groups, find_group, group_for_option, is_known_category,
    variable_groups,
};
use budget_buddy::domain::ExpenseKind;
use budget_buddy::errors::BudgetError;

#[test]
fn essential_groups_are_in_display_order() {
    let names: Vec<_> = essential_groups().iter().map(|g| g.name).collect();
    assert_eq!(
        names,
        ["Housing", "Utilities", "Transportation", "Debt Payments"]
    );
}

#[test]
fn variable_groups_are_in_display_order() {
    let names: Vec<_> = variable_groups().iter().map(|g| g.name).collect();
    assert_eq!(names, ["Food", "Personal Care", "Entertainment", "Shopping"]);
}

#[test]
fn flattened_options_follow_group_order() {
    let options = all_options();
    let expected = all_groups().flat_map(|(_, group)| group.options.iter().copied());
    assert!(options.iter().copied().eq(expected));
    assert_eq!(options.first(), Some(&"Rent / Mortgage"));
    assert!(options.contains(&"Student Loans"));
}

#[test]
fn lookups_ignore_case_and_report_kind() {
    let (kind, group) = find_group("debt payments").unwrap();
    assert_eq!(kind, ExpenseKind::Essential);
    assert_eq!(group.name, "Debt Payments");

    let (kind, group, option) = group_for_option("movies / cinema").unwrap();
    assert_eq!(kind, ExpenseKind::Variable);
    assert_eq!(group.name, "Entertainment");
    assert_eq!(option, "Movies / Cinema");

    assert!(is_known_category("Shopping"));
    assert!(is_known_category("fuel (gas/petrol)"));
    assert!(!is_known_category("Lottery"));
}

#[test]
fn resolve_accepts_group_with_sub_option() {
    let resolved =
        CategoryService::resolve(ExpenseKind::Essential, "housing", Some("rent / mortgage"))
            .unwrap();
    assert_eq!(resolved.category(), "Housing");
    assert_eq!(resolved.sub_category, Some("Rent / Mortgage"));
}

#[test]
fn resolve_maps_bare_option_to_its_group() {
    let resolved = CategoryService::resolve(ExpenseKind::Variable, "Groceries", None).unwrap();
    assert_eq!(resolved.category(), "Food");
    assert_eq!(resolved.sub_category, Some("Groceries"));
}

#[test]
fn resolve_rejects_group_of_other_kind() {
    let err = CategoryService::resolve(ExpenseKind::Variable, "Housing", None).unwrap_err();
    assert!(matches!(err, ServiceError::Invalid(_)));
}

#[test]
fn resolve_suggests_nearby_names() {
    let err = CategoryService::resolve(ExpenseKind::Essential, "Utilites", None).unwrap_err();
    match err {
        ServiceError::Core(BudgetError::UnknownCategory { input, suggestion }) => {
            assert_eq!(input, "Utilites");
            assert_eq!(suggestion.as_deref(), Some("Utilities"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
