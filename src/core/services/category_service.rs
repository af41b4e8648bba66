use strsim::levenshtein;

use crate::domain::category::{self, CategoryGroup};
use crate::domain::ExpenseKind;
use crate::errors::BudgetError;

use super::{ServiceError, ServiceResult};

const MAX_SUGGESTION_DISTANCE: usize = 3;

/// A submitted category checked against the taxonomy, in canonical spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedCategory {
    pub kind: ExpenseKind,
    pub group: &'static CategoryGroup,
    pub sub_category: Option<&'static str>,
}

impl ResolvedCategory {
    pub fn category(&self) -> &'static str {
        self.group.name
    }
}

pub struct CategoryService;

impl CategoryService {
    pub fn groups(kind: ExpenseKind) -> &'static [CategoryGroup] {
        category::groups_for(kind)
    }

    /// Validates a category (and optional sub-category) for an expense of
    /// `kind`.
    ///
    /// `category` may name a group, or directly name one of the detailed
    /// options; in the latter case the owning group becomes the category and
    /// the option the sub-category.
    pub fn resolve(
        kind: ExpenseKind,
        category: &str,
        sub_category: Option<&str>,
    ) -> ServiceResult<ResolvedCategory> {
        if let Some((group_kind, group)) = category::find_group(category) {
            Self::ensure_kind(kind, group_kind, group.name)?;
            let sub_category = match sub_category {
                Some(sub) => Some(Self::resolve_option(group, sub)?),
                None => None,
            };
            return Ok(ResolvedCategory {
                kind,
                group,
                sub_category,
            });
        }

        if let Some((option_kind, group, option)) = category::group_for_option(category) {
            Self::ensure_kind(kind, option_kind, option)?;
            if let Some(sub) = sub_category {
                if !sub.trim().eq_ignore_ascii_case(option) {
                    return Err(ServiceError::Invalid(format!(
                        "`{}` is already a detailed category; drop the extra `{}`",
                        option,
                        sub.trim()
                    )));
                }
            }
            return Ok(ResolvedCategory {
                kind,
                group,
                sub_category: Some(option),
            });
        }

        let candidates = Self::groups(kind)
            .iter()
            .flat_map(|group| std::iter::once(group.name).chain(group.options.iter().copied()));
        Err(BudgetError::UnknownCategory {
            input: category.trim().to_string(),
            suggestion: closest(category, candidates).map(str::to_string),
        }
        .into())
    }

    fn resolve_option(group: &CategoryGroup, sub: &str) -> ServiceResult<&'static str> {
        if let Some(option) = group.option(sub) {
            return Ok(option);
        }
        if let Some((_, owner, option)) = category::group_for_option(sub) {
            return Err(ServiceError::Invalid(format!(
                "`{}` belongs to `{}`, not `{}`",
                option, owner.name, group.name
            )));
        }
        Err(BudgetError::UnknownCategory {
            input: sub.trim().to_string(),
            suggestion: closest(sub, group.options.iter().copied()).map(str::to_string),
        }
        .into())
    }

    fn ensure_kind(expected: ExpenseKind, actual: ExpenseKind, name: &str) -> ServiceResult<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(ServiceError::Invalid(format!(
                "`{}` is a {} category, not {}",
                name, actual, expected
            )))
        }
    }
}

/// Nearest candidate by edit distance, if it is close enough to be a typo.
fn closest<'a>(input: &str, candidates: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let needle = input.trim().to_ascii_lowercase();
    candidates
        .map(|candidate| (levenshtein(&candidate.to_ascii_lowercase(), &needle), candidate))
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate)
}
