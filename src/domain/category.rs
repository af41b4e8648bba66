//! Fixed expense category taxonomy.
//!
//! Categories are split into essential and variable groups; each group carries
//! an ordered list of detailed options. The data is static and read-only.

use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::domain::expense::ExpenseKind;

/// A named cluster of related sub-category options.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CategoryGroup {
    pub name: &'static str,
    pub options: &'static [&'static str],
}

impl CategoryGroup {
    const fn new(name: &'static str, options: &'static [&'static str]) -> Self {
        Self { name, options }
    }

    /// Canonical spelling of `option` if it belongs to this group.
    pub fn option(&self, option: &str) -> Option<&'static str> {
        let needle = option.trim();
        self.options
            .iter()
            .copied()
            .find(|candidate| candidate.eq_ignore_ascii_case(needle))
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

const HOUSING: &[&str] = &[
    "Rent / Mortgage",
    "Property Taxes",
    "Homeowners/Renters Insurance",
    "HOA Fees",
    "Home Maintenance / Repairs",
    "Other Housing",
];

const UTILITIES: &[&str] = &[
    "Electricity / Gas",
    "Water / Sewer",
    "Internet / Cable TV",
    "Mobile Phone",
    "Trash / Recycling",
    "Other Utilities",
];

const TRANSPORTATION: &[&str] = &[
    "Car Payment",
    "Car Insurance",
    "Fuel (Gas/Petrol)",
    "Public Transportation (Bus, Train, Metro)",
    "Ride Sharing (Uber, Lyft, Ola, etc.)",
    "Vehicle Maintenance / Repairs",
    "Parking Fees / Tolls",
    "Other Transportation",
];

const DEBT_PAYMENTS: &[&str] = &[
    "Credit Card Payments",
    "Student Loans",
    "Personal Loans",
    "Other Loan Payments",
];

const FOOD: &[&str] = &[
    "Groceries",
    "Dining Out / Restaurants",
    "Coffee Shops",
    "Takeaway / Delivery",
    "Other Food",
];

const PERSONAL_CARE: &[&str] = &[
    "Haircuts / Salon",
    "Toiletries / Personal Hygiene Products",
    "Gym / Fitness",
    "Clothing / Shoes",
    "Dry Cleaning / Laundry",
    "Other Personal Care",
];

const ENTERTAINMENT: &[&str] = &[
    "Streaming Services (Netflix, Spotify, etc.)",
    "Movies / Cinema",
    "Concerts / Events",
    "Hobbies",
    "Books / Music",
    "Video Games",
    "Other Entertainment",
];

const SHOPPING: &[&str] = &[
    "General Shopping",
    "Electronics",
    "Home Goods",
    "Gifts",
    "Other Shopping",
];

static ESSENTIAL_GROUPS: [CategoryGroup; 4] = [
    CategoryGroup::new("Housing", HOUSING),
    CategoryGroup::new("Utilities", UTILITIES),
    CategoryGroup::new("Transportation", TRANSPORTATION),
    CategoryGroup::new("Debt Payments", DEBT_PAYMENTS),
];

static VARIABLE_GROUPS: [CategoryGroup; 4] = [
    CategoryGroup::new("Food", FOOD),
    CategoryGroup::new("Personal Care", PERSONAL_CARE),
    CategoryGroup::new("Entertainment", ENTERTAINMENT),
    CategoryGroup::new("Shopping", SHOPPING),
];

static ALL_OPTIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    ESSENTIAL_GROUPS
        .iter()
        .chain(VARIABLE_GROUPS.iter())
        .flat_map(|group| group.options.iter().copied())
        .collect()
});

pub fn essential_groups() -> &'static [CategoryGroup] {
    &ESSENTIAL_GROUPS
}

pub fn variable_groups() -> &'static [CategoryGroup] {
    &VARIABLE_GROUPS
}

pub fn groups_for(kind: ExpenseKind) -> &'static [CategoryGroup] {
    match kind {
        ExpenseKind::Essential => essential_groups(),
        ExpenseKind::Variable => variable_groups(),
    }
}

/// Every detailed option, essential groups first, in declaration order.
pub fn all_options() -> &'static [&'static str] {
    ALL_OPTIONS.as_slice()
}

/// Every group paired with the type it belongs to.
pub fn all_groups() -> impl Iterator<Item = (ExpenseKind, &'static CategoryGroup)> {
    ExpenseKind::ALL
        .into_iter()
        .flat_map(|kind| groups_for(kind).iter().map(move |group| (kind, group)))
}

/// Looks a group up by name, ignoring ASCII case and surrounding whitespace.
pub fn find_group(name: &str) -> Option<(ExpenseKind, &'static CategoryGroup)> {
    let needle = name.trim();
    all_groups().find(|(_, group)| group.name.eq_ignore_ascii_case(needle))
}

/// Finds the group owning a detailed option.
pub fn group_for_option(option: &str) -> Option<(ExpenseKind, &'static CategoryGroup, &'static str)> {
    all_groups().find_map(|(kind, group)| group.option(option).map(|found| (kind, group, found)))
}

/// Whether `name` is a recognised group name or detailed option.
pub fn is_known_category(name: &str) -> bool {
    find_group(name).is_some() || group_for_option(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_names_follow_declaration_order() {
        let essential: Vec<_> = essential_groups().iter().map(|g| g.name).collect();
        assert_eq!(
            essential,
            ["Housing", "Utilities", "Transportation", "Debt Payments"]
        );
        let variable: Vec<_> = variable_groups().iter().map(|g| g.name).collect();
        assert_eq!(variable, ["Food", "Personal Care", "Entertainment", "Shopping"]);
    }

    #[test]
    fn flattened_options_cover_every_group() {
        let expected: usize = all_groups().map(|(_, group)| group.options.len()).sum();
        assert_eq!(all_options().len(), expected);
        assert_eq!(all_options().first(), Some(&"Rent / Mortgage"));
        assert_eq!(all_options().last(), Some(&"Other Shopping"));
    }

    #[test]
    fn lookups_ignore_case() {
        let (kind, group) = find_group("debt payments").unwrap();
        assert_eq!(kind, ExpenseKind::Essential);
        assert_eq!(group.name, "Debt Payments");

        let (kind, group, option) = group_for_option("coffee shops").unwrap();
        assert_eq!(kind, ExpenseKind::Variable);
        assert_eq!(group.name, "Food");
        assert_eq!(option, "Coffee Shops");

        assert!(is_known_category("HOUSING"));
        assert!(is_known_category("Video Games"));
        assert!(!is_known_category("Yachts"));
    }
}
