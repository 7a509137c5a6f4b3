//! # Transaction categories
//!
//! A fixed taxonomy of string keys (`food`, `salary`, ...) used to tag income and
//! expense entries. Each key has a Korean display label and an icon asset path,
//! and belongs to one of two kinds:
//!
//! | Kind | Keys |
//! |------|------|
//! | [`CategoryKind::Expense`] | food, dessert, entertainment, shopping, supplies, transportation, utilities, health, leisure, travel, contributions, savings, etc |
//! | [`CategoryKind::Income`] | salary, allowance, financial, scholarship, etc |
//!
//! `etc` is registered once and shared by both kinds; every other key belongs to
//! exactly one. The lookup tables are `match` arms on [`Category`], so a key
//! without a label or icon does not compile.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two category partitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Expense,
    Income,
}

impl CategoryKind {
    /// Categories of this kind, in display order.
    pub fn categories(self) -> &'static [Category] {
        match self {
            CategoryKind::Expense => &EXPENSE_CATEGORIES,
            CategoryKind::Income => &INCOME_CATEGORIES,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryKind::Expense => "지출",
            CategoryKind::Income => "수입",
        }
    }
}

/// A category key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Dessert,
    Entertainment,
    Shopping,
    Supplies,
    Transportation,
    Utilities,
    Health,
    Leisure,
    Travel,
    Contributions,
    Savings,
    Etc,
    Salary,
    Allowance,
    Financial,
    Scholarship,
}

/// Expense categories, in display order.
pub const EXPENSE_CATEGORIES: [Category; 13] = [
    Category::Food,
    Category::Dessert,
    Category::Entertainment,
    Category::Shopping,
    Category::Supplies,
    Category::Transportation,
    Category::Utilities,
    Category::Health,
    Category::Leisure,
    Category::Travel,
    Category::Contributions,
    Category::Savings,
    Category::Etc,
];

/// Income categories, in display order.
pub const INCOME_CATEGORIES: [Category; 5] = [
    Category::Salary,
    Category::Allowance,
    Category::Financial,
    Category::Scholarship,
    Category::Etc,
];

/// Every key with a label and icon, each exactly once.
pub const ALL_CATEGORIES: [Category; 17] = [
    Category::Food,
    Category::Dessert,
    Category::Entertainment,
    Category::Shopping,
    Category::Supplies,
    Category::Transportation,
    Category::Utilities,
    Category::Health,
    Category::Leisure,
    Category::Travel,
    Category::Contributions,
    Category::Savings,
    Category::Etc,
    Category::Salary,
    Category::Allowance,
    Category::Financial,
    Category::Scholarship,
];

impl Category {
    /// The wire/storage key, e.g. `"food"`.
    pub fn key(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Dessert => "dessert",
            Category::Entertainment => "entertainment",
            Category::Shopping => "shopping",
            Category::Supplies => "supplies",
            Category::Transportation => "transportation",
            Category::Utilities => "utilities",
            Category::Health => "health",
            Category::Leisure => "leisure",
            Category::Travel => "travel",
            Category::Contributions => "contributions",
            Category::Savings => "savings",
            Category::Etc => "etc",
            Category::Salary => "salary",
            Category::Allowance => "allowance",
            Category::Financial => "financial",
            Category::Scholarship => "scholarship",
        }
    }

    /// Korean display label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "식비",
            Category::Dessert => "카페/간식",
            Category::Entertainment => "술/유흥",
            Category::Shopping => "쇼핑",
            Category::Supplies => "생필품",
            Category::Transportation => "교통",
            Category::Utilities => "주거/통신",
            Category::Health => "의료/건강",
            Category::Leisure => "문화/여가",
            Category::Travel => "여행/숙박",
            Category::Contributions => "경조사/회비",
            Category::Savings => "저축",
            Category::Etc => "기타",
            Category::Salary => "급여",
            Category::Allowance => "용돈",
            Category::Financial => "금융수입",
            Category::Scholarship => "장학금",
        }
    }

    /// Icon asset path.
    pub fn icon(self) -> &'static str {
        match self {
            Category::Food => "/src/img/icons/bowl-food-solid.svg",
            Category::Dessert => "/src/img/icons/mug-saucer-solid.svg",
            Category::Entertainment => "/src/img/icons/wine-glass-solid.svg",
            Category::Shopping => "/src/img/icons/bag-shopping-solid.svg",
            Category::Supplies => "/src/img/icons/house-solid.svg",
            Category::Transportation => "/src/img/icons/bus-simple-solid.svg",
            Category::Utilities => "/src/img/icons/gear-solid.svg",
            Category::Health => "/src/img/icons/house-medical-solid.svg",
            Category::Leisure => "/src/img/icons/beach-chair.png",
            Category::Travel => "/src/img/icons/travel-agency.png",
            Category::Contributions => "/src/img/icons/mail.png",
            Category::Savings => "/src/img/icons/piggy-bank.png",
            Category::Etc => "/src/img/icons/more.png",
            Category::Salary => "/src/img/icons/wages.png",
            Category::Allowance => "/src/img/icons/pay.png",
            Category::Financial => "/src/img/icons/financial-profit.png",
            Category::Scholarship => "/src/img/icons/mortarboard.png",
        }
    }

    /// Whether this category can tag an entry of `kind`.
    pub fn is_kind(self, kind: CategoryKind) -> bool {
        kind.categories().contains(&self)
    }

    /// The kinds this category belongs to. Only `etc` belongs to both.
    pub fn kinds(self) -> Vec<CategoryKind> {
        [CategoryKind::Expense, CategoryKind::Income]
            .into_iter()
            .filter(|kind| self.is_kind(*kind))
            .collect()
    }

    pub fn is_shared(self) -> bool {
        self == Category::Etc
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string is not a known category key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category key: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_CATEGORIES
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
