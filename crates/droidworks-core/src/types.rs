//! # Domain Types
//!
//! Droids, their build options, and the categories the catalog groups by.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Droid       │   │   DroidModel    │   │    Category     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  Protocol       │   │  Astromech  ▲   │       │
//! │  │  material       │──►│  Utility        │──►│  Janitor    │   │       │
//! │  │  color          │   │  Janitor        │   │  Utility  rank  │       │
//! │  │  model          │   │  Astromech      │   │  Protocol   │   │       │
//! │  │  category (tag) │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Material     │   │      Color      │   │ CategoryRanking │       │
//! │  │  Carbonite $100 │   │  White  $10     │   │  ordered, no    │       │
//! │  │  Vanadium  $120 │   │  Red    $20     │   │  duplicates     │       │
//! │  │  Quadranium$150 │   │  Green  $40     │   └─────────────────┘       │
//! │  │  Tears     $200 │   │  Blue   $50     │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Most-Specific-First, Once
//! Janitor and Astromech droids are utility droids with extra options. The
//! category is decided from the model variant when the droid is built and
//! stored on it, so nothing downstream has to test "is it an astromech
//! before checking whether it is a utility droid".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;
use crate::router::Categorized;

/// Normalizes user spellings: `"Tears Of A Jedi"`, `"tears_of_a_jedi"` and
/// `"TearsOfAJedi"` all become `"tearsofajedi"`.
fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

fn parse_named<T: Copy>(
    field: &str,
    input: &str,
    all: &[T],
    name: impl Fn(T) -> &'static str,
) -> Result<T, ValidationError> {
    let wanted = normalize(input);
    if wanted.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    all.iter()
        .copied()
        .find(|candidate| normalize(name(*candidate)) == wanted)
        .ok_or_else(|| ValidationError::NotAllowed {
            field: field.to_string(),
            allowed: all.iter().map(|c| name(*c).to_string()).collect(),
        })
}

// =============================================================================
// Material
// =============================================================================

/// What the droid's chassis is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Carbonite,
    Vanadium,
    Quadranium,
    TearsOfAJedi,
}

impl Material {
    /// Every material, in menu order.
    pub const ALL: [Material; 4] = [
        Material::Carbonite,
        Material::Vanadium,
        Material::Quadranium,
        Material::TearsOfAJedi,
    ];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Material::Carbonite => "Carbonite",
            Material::Vanadium => "Vanadium",
            Material::Quadranium => "Quadranium",
            Material::TearsOfAJedi => "Tears Of A Jedi",
        }
    }

    /// Surcharge for this material.
    pub const fn cost(self) -> Money {
        match self {
            Material::Carbonite => Money::from_major_minor(100, 0),
            Material::Vanadium => Money::from_major_minor(120, 0),
            Material::Quadranium => Money::from_major_minor(150, 0),
            Material::TearsOfAJedi => Money::from_major_minor(200, 0),
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Material {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named("material", s, &Material::ALL, Material::name)
    }
}

// =============================================================================
// Color
// =============================================================================

/// Paint job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    White,
    Red,
    Green,
    Blue,
}

impl Color {
    /// Every color, in menu order.
    pub const ALL: [Color; 4] = [Color::White, Color::Red, Color::Green, Color::Blue];

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
        }
    }

    pub const fn cost(self) -> Money {
        match self {
            Color::White => Money::from_major_minor(10, 0),
            Color::Red => Money::from_major_minor(20, 0),
            Color::Green => Money::from_major_minor(40, 0),
            Color::Blue => Money::from_major_minor(50, 0),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named("color", s, &Color::ALL, Color::name)
    }
}

// =============================================================================
// Category
// =============================================================================

/// The bucket a droid is grouped into, one per model.
///
/// Declaration order is the default ranking: most specific first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Astromech,
    Janitor,
    Utility,
    Protocol,
}

impl Category {
    /// Every category, most specific first.
    pub const ALL: [Category; 4] = [
        Category::Astromech,
        Category::Janitor,
        Category::Utility,
        Category::Protocol,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Category::Astromech => "Astromech",
            Category::Janitor => "Janitor",
            Category::Utility => "Utility",
            Category::Protocol => "Protocol",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named("category", s, &Category::ALL, Category::name)
    }
}

// =============================================================================
// Category Ranking
// =============================================================================

/// Order in which categories are emitted by
/// [`Catalog::sort_into_categories`](crate::catalog::Catalog::sort_into_categories).
///
/// ## Rules
/// - No category may appear twice
/// - Categories may be left out; a droid of an omitted category makes the
///   bucketing pass fail with `CoreError::UnrecognizedCategory`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Category>", into = "Vec<Category>")]
pub struct CategoryRanking(Vec<Category>);

impl CategoryRanking {
    /// Builds a ranking, rejecting duplicates.
    ///
    /// ## Example
    /// ```rust
    /// use droidworks_core::types::{Category, CategoryRanking};
    ///
    /// let ranking = CategoryRanking::new(vec![Category::Protocol, Category::Utility]);
    /// assert!(ranking.is_ok());
    ///
    /// let twice = CategoryRanking::new(vec![Category::Utility, Category::Utility]);
    /// assert!(twice.is_err());
    /// ```
    pub fn new(order: Vec<Category>) -> Result<Self, ValidationError> {
        for (index, category) in order.iter().enumerate() {
            if order[..index].contains(category) {
                return Err(ValidationError::Duplicate {
                    field: "category".to_string(),
                    value: category.name().to_string(),
                });
            }
        }
        Ok(CategoryRanking(order))
    }

    /// Categories, highest rank first.
    pub fn as_slice(&self) -> &[Category] {
        &self.0
    }
}

impl Default for CategoryRanking {
    fn default() -> Self {
        CategoryRanking(Category::ALL.to_vec())
    }
}

impl TryFrom<Vec<Category>> for CategoryRanking {
    type Error = ValidationError;

    fn try_from(order: Vec<Category>) -> Result<Self, Self::Error> {
        CategoryRanking::new(order)
    }
}

impl From<CategoryRanking> for Vec<Category> {
    fn from(ranking: CategoryRanking) -> Self {
        ranking.0
    }
}

// =============================================================================
// Droid Models
// =============================================================================

/// Options shared by utility droids and the models built on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UtilityOptions {
    pub toolbox: bool,
    pub computer_connection: bool,
    pub scanner: bool,
}

impl UtilityOptions {
    pub const fn new(toolbox: bool, computer_connection: bool, scanner: bool) -> Self {
        UtilityOptions {
            toolbox,
            computer_connection,
            scanner,
        }
    }

    /// Number of options selected.
    pub fn count(&self) -> u32 {
        [self.toolbox, self.computer_connection, self.scanner]
            .into_iter()
            .filter(|selected| *selected)
            .count() as u32
    }
}

/// Model-specific configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum DroidModel {
    Protocol {
        languages: u32,
    },
    Utility {
        #[serde(flatten)]
        utility: UtilityOptions,
    },
    Janitor {
        #[serde(flatten)]
        utility: UtilityOptions,
        broom: bool,
        vacuum: bool,
    },
    Astromech {
        #[serde(flatten)]
        utility: UtilityOptions,
        navigation: bool,
        ships: u32,
    },
}

impl DroidModel {
    /// Price of each protocol language.
    pub const COST_PER_LANGUAGE: Money = Money::from_major_minor(25, 0);
    /// Price of each yes/no option on utility-derived models.
    pub const COST_PER_OPTION: Money = Money::from_major_minor(35, 0);
    /// Price of each ship an astromech is certified for.
    pub const COST_PER_SHIP: Money = Money::from_major_minor(45, 0);

    /// The category this model is grouped into.
    pub const fn category(&self) -> Category {
        match self {
            DroidModel::Protocol { .. } => Category::Protocol,
            DroidModel::Utility { .. } => Category::Utility,
            DroidModel::Janitor { .. } => Category::Janitor,
            DroidModel::Astromech { .. } => Category::Astromech,
        }
    }

    /// Base price of the model before material, color and extras.
    pub const fn model_cost(&self) -> Money {
        match self {
            DroidModel::Protocol { .. } => Money::from_major_minor(120, 0),
            DroidModel::Utility { .. } => Money::from_major_minor(130, 0),
            DroidModel::Janitor { .. } => Money::from_major_minor(160, 0),
            DroidModel::Astromech { .. } => Money::from_major_minor(200, 0),
        }
    }

    /// Languages, options and ships.
    pub fn extras_cost(&self) -> Money {
        match *self {
            DroidModel::Protocol { languages } => Self::COST_PER_LANGUAGE * languages,
            DroidModel::Utility { utility } => Self::COST_PER_OPTION * utility.count(),
            DroidModel::Janitor {
                utility,
                broom,
                vacuum,
            } => Self::COST_PER_OPTION * (utility.count() + broom as u32 + vacuum as u32),
            DroidModel::Astromech {
                utility,
                navigation,
                ships,
            } => {
                Self::COST_PER_OPTION * (utility.count() + navigation as u32)
                    + Self::COST_PER_SHIP * ships
            }
        }
    }

    fn write_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DroidModel::Protocol { languages } => {
                writeln!(f, "Number of Languages: {}", languages)
            }
            DroidModel::Utility { utility } => write_utility(f, utility),
            DroidModel::Janitor {
                utility,
                broom,
                vacuum,
            } => {
                write_utility(f, utility)?;
                writeln!(f, "Has Broom: {}", broom)?;
                writeln!(f, "Has Vacuum: {}", vacuum)
            }
            DroidModel::Astromech {
                utility,
                navigation,
                ships,
            } => {
                write_utility(f, utility)?;
                writeln!(f, "Has Navigation: {}", navigation)?;
                writeln!(f, "Number Of Ships: {}", ships)
            }
        }
    }
}

fn write_utility(f: &mut fmt::Formatter<'_>, utility: &UtilityOptions) -> fmt::Result {
    writeln!(f, "Has Tool Box: {}", utility.toolbox)?;
    writeln!(f, "Has Computer Connection: {}", utility.computer_connection)?;
    writeln!(f, "Has Scanner: {}", utility.scanner)
}

// =============================================================================
// Droid
// =============================================================================

/// A droid in the catalog.
///
/// Fields are private so `category` can never drift from `model`. JSON input
/// goes through [`DroidRecord`], which derives the category from the model
/// and rejects a conflicting one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DroidRecord")]
pub struct Droid {
    id: Uuid,
    material: Material,
    color: Color,
    #[serde(flatten)]
    model: DroidModel,
    category: Category,
    created_at: DateTime<Utc>,
}

/// Wire shape of a [`Droid`]; `category` is optional and only checked.
#[derive(Deserialize)]
struct DroidRecord {
    id: Uuid,
    material: Material,
    color: Color,
    #[serde(flatten)]
    model: DroidModel,
    #[serde(default)]
    category: Option<Category>,
    created_at: DateTime<Utc>,
}

impl TryFrom<DroidRecord> for Droid {
    type Error = ValidationError;

    fn try_from(record: DroidRecord) -> Result<Self, Self::Error> {
        let category = record.model.category();
        if let Some(claimed) = record.category {
            if claimed != category {
                return Err(ValidationError::InvalidFormat {
                    field: "category".to_string(),
                    reason: format!("{} does not match model {}", claimed, category),
                });
            }
        }

        Ok(Droid {
            id: record.id,
            material: record.material,
            color: record.color,
            model: record.model,
            category,
            created_at: record.created_at,
        })
    }
}

impl Droid {
    /// Builds a droid and tags it with its model's category.
    pub fn new(material: Material, color: Color, model: DroidModel) -> Self {
        Droid {
            id: Uuid::new_v4(),
            material,
            color,
            category: model.category(),
            model,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn material(&self) -> Material {
        self.material
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn model(&self) -> &DroidModel {
        &self.model
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Model + material + color + extras.
    ///
    /// Computed from the droid's attributes on every call, so a sort keyed on
    /// it never sees a stale total.
    ///
    /// ## Example
    /// ```rust
    /// use droidworks_core::types::{Color, Droid, DroidModel, Material};
    ///
    /// let droid = Droid::new(
    ///     Material::Carbonite,
    ///     Color::White,
    ///     DroidModel::Protocol { languages: 12 },
    /// );
    /// // 120 + 100 + 10 + 12 × 25
    /// assert_eq!(droid.total_cost().to_string(), "$530.00");
    /// ```
    pub fn total_cost(&self) -> Money {
        self.model.model_cost() + self.material.cost() + self.color.cost() + self.model.extras_cost()
    }
}

impl Categorized for Droid {
    type Category = Category;

    fn category(&self) -> Category {
        self.category
    }
}

impl fmt::Display for Droid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model: {}", self.category)?;
        writeln!(f, "Material: {}", self.material)?;
        writeln!(f, "Color: {}", self.color)?;
        self.model.write_details(f)?;
        write!(f, "Total Cost: {}", self.total_cost())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn all_options() -> UtilityOptions {
        UtilityOptions::new(true, true, true)
    }

    #[test]
    fn test_material_and_color_costs() {
        assert_eq!(Material::Carbonite.cost().cents(), 10_000);
        assert_eq!(Material::TearsOfAJedi.cost().cents(), 20_000);
        assert_eq!(Color::White.cost().cents(), 1_000);
        assert_eq!(Color::Blue.cost().cents(), 5_000);
    }

    #[test]
    fn test_parse_accepts_loose_spellings() {
        assert_eq!(
            "Tears Of A Jedi".parse::<Material>().unwrap(),
            Material::TearsOfAJedi
        );
        assert_eq!(
            "tears_of_a_jedi".parse::<Material>().unwrap(),
            Material::TearsOfAJedi
        );
        assert_eq!(" GREEN ".parse::<Color>().unwrap(), Color::Green);
        assert_eq!("astromech".parse::<Category>().unwrap(), Category::Astromech);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "Gold".parse::<Material>().unwrap_err();
        assert!(matches!(err, ValidationError::NotAllowed { .. }));

        let err = "".parse::<Color>().unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));
    }

    #[test]
    fn test_category_comes_from_model() {
        let janitor = Droid::new(
            Material::Vanadium,
            Color::Red,
            DroidModel::Janitor {
                utility: all_options(),
                broom: true,
                vacuum: false,
            },
        );
        assert_eq!(janitor.category(), Category::Janitor);
        assert_eq!(Categorized::category(&janitor), Category::Janitor);
    }

    #[test]
    fn test_total_costs_per_model() {
        let utility = Droid::new(
            Material::Vanadium,
            Color::Red,
            DroidModel::Utility {
                utility: all_options(),
            },
        );
        // 130 + 120 + 20 + 3 × 35
        assert_eq!(utility.total_cost().cents(), 37_500);

        let janitor = Droid::new(
            Material::Quadranium,
            Color::Blue,
            DroidModel::Janitor {
                utility: all_options(),
                broom: true,
                vacuum: true,
            },
        );
        // 160 + 150 + 50 + 5 × 35
        assert_eq!(janitor.total_cost().cents(), 53_500);

        let astromech = Droid::new(
            Material::TearsOfAJedi,
            Color::Green,
            DroidModel::Astromech {
                utility: UtilityOptions::new(true, true, false),
                navigation: true,
                ships: 80,
            },
        );
        // 200 + 200 + 40 + 3 × 35 + 80 × 45
        assert_eq!(astromech.total_cost().cents(), 414_500);
    }

    #[test]
    fn test_ranking_rejects_duplicates() {
        assert!(CategoryRanking::new(vec![]).is_ok());
        let err = CategoryRanking::new(vec![
            Category::Protocol,
            Category::Janitor,
            Category::Protocol,
        ])
        .unwrap_err();
        assert!(matches!(err, ValidationError::Duplicate { .. }));
    }

    #[test]
    fn test_default_ranking_is_most_specific_first() {
        assert_eq!(
            CategoryRanking::default().as_slice(),
            &[
                Category::Astromech,
                Category::Janitor,
                Category::Utility,
                Category::Protocol
            ]
        );
    }

    #[test]
    fn test_ranking_deserializes_with_validation() {
        let ok: CategoryRanking = serde_json::from_str(r#"["protocol","utility"]"#).unwrap();
        assert_eq!(ok.as_slice(), &[Category::Protocol, Category::Utility]);

        let dup = serde_json::from_str::<CategoryRanking>(r#"["utility","utility"]"#);
        assert!(dup.is_err());
    }

    #[test]
    fn test_droid_display() {
        let droid = Droid::new(
            Material::Carbonite,
            Color::White,
            DroidModel::Protocol { languages: 12 },
        );
        assert_eq!(
            droid.to_string(),
            "Model: Protocol\n\
             Material: Carbonite\n\
             Color: White\n\
             Number of Languages: 12\n\
             Total Cost: $530.00"
        );
    }

    #[test]
    fn test_droid_json_shape() {
        let droid = Droid::new(
            Material::Vanadium,
            Color::Red,
            DroidModel::Astromech {
                utility: UtilityOptions::default(),
                navigation: false,
                ships: 2,
            },
        );
        let json = serde_json::to_value(&droid).unwrap();
        assert_eq!(json["model"], "astromech");
        assert_eq!(json["category"], "astromech");
        assert_eq!(json["ships"], 2);
        assert_eq!(json["material"], "vanadium");

        let back: Droid = serde_json::from_value(json).unwrap();
        assert_eq!(back, droid);
    }

    #[test]
    fn test_droid_json_category_follows_model() {
        let droid = Droid::new(
            Material::Carbonite,
            Color::White,
            DroidModel::Protocol { languages: 3 },
        );
        let mut json = serde_json::to_value(&droid).unwrap();

        json["category"] = serde_json::Value::from("astromech");
        let err = serde_json::from_value::<Droid>(json.clone()).unwrap_err();
        assert!(err.to_string().contains("Astromech does not match model Protocol"));

        json.as_object_mut().unwrap().remove("category");
        let back: Droid = serde_json::from_value(json).unwrap();
        assert_eq!(back.category(), Category::Protocol);
        assert_eq!(back, droid);
    }
}
