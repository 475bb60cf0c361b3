use serde::{Deserialize, Serialize};

use crate::models::money::Cents;
use crate::models::{CatalogItem, MacroProfile, Recipe};

/// Position of a meal inside a week plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub day: usize,
    pub meal: usize,
}

impl Placement {
    pub fn new(day: usize, meal: usize) -> Self {
        Self { day, meal }
    }
}

/// What fills a meal slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "ref", rename_all = "snake_case")]
pub enum MealSource {
    ReadyToEat(CatalogItem),
    Recipe(Recipe),
}

/// A meal-slot filler chosen by the selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedItem {
    pub source: MealSource,

    /// Set by the assembler once the item owns a meal.
    #[serde(default)]
    pub placement: Option<Placement>,
}

impl SelectedItem {
    pub fn ready_to_eat(item: CatalogItem) -> Self {
        Self {
            source: MealSource::ReadyToEat(item),
            placement: None,
        }
    }

    pub fn recipe(recipe: Recipe) -> Self {
        Self {
            source: MealSource::Recipe(recipe),
            placement: None,
        }
    }

    pub fn is_ready_to_eat(&self) -> bool {
        matches!(self.source, MealSource::ReadyToEat(_))
    }

    pub fn title(&self) -> &str {
        match &self.source {
            MealSource::ReadyToEat(item) => &item.name,
            MealSource::Recipe(recipe) => &recipe.title,
        }
    }

    pub fn macros(&self) -> MacroProfile {
        match &self.source {
            MealSource::ReadyToEat(item) => item.macros,
            MealSource::Recipe(recipe) => recipe.macros,
        }
    }

    pub fn price_cents(&self) -> Cents {
        match &self.source {
            MealSource::ReadyToEat(item) => item.price_cents(),
            MealSource::Recipe(recipe) => recipe.price_cents(),
        }
    }
}

/// Why an extra was attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraKind {
    /// Attached during assembly; shows up in the meal title.
    Side,
    /// Attached by the macro balancer.
    Filler,
    /// Attached while spending leftover budget.
    TopUp,
}

/// A removable item layered on top of a base meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    pub placement: Placement,
    pub item: CatalogItem,
    pub kind: ExtraKind,
}

/// One meal: the base item plus whatever extras are attached to it.
///
/// `title` and `macros` are derived and rebuilt by [`WeekPlan`] after every
/// attach or detach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub base_title: String,
    pub base_macros: MacroProfile,
    pub title: String,
    pub macros: MacroProfile,
}

impl Meal {
    pub fn new(base_title: impl Into<String>, base_macros: MacroProfile) -> Self {
        let base_title = base_title.into();
        Self {
            title: base_title.clone(),
            macros: base_macros,
            base_title,
            base_macros,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub meals: Vec<Meal>,
    pub total_protein: f64,
    pub total_calories: f64,
}

impl Day {
    pub fn totals(&self) -> MacroProfile {
        self.meals.iter().map(|m| &m.macros).sum()
    }
}

/// Macros of a meal rebuilt from its base and the extras attached to it.
pub fn meal_macros<'a>(
    base: MacroProfile,
    attached: impl IntoIterator<Item = &'a Extra>,
) -> MacroProfile {
    attached
        .into_iter()
        .fold(base, |acc, extra| acc + extra.item.macros)
}

/// Protein and calorie totals of a day, summed from its meals.
pub fn recompute_day(day: &Day) -> (f64, f64) {
    let totals = day.totals();
    (totals.protein, totals.calories)
}

/// A full week: days of meals, the base items behind them, and the extras.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub days: Vec<Day>,
    pub base_items: Vec<SelectedItem>,
    pub extras: Vec<Extra>,
}

impl WeekPlan {
    /// Record an extra and rebuild the meal it lands on.
    ///
    /// The placement must point at an existing meal.
    pub fn attach(&mut self, placement: Placement, item: CatalogItem, kind: ExtraKind) {
        debug_assert!(self.meal(placement).is_some());
        self.extras.push(Extra {
            placement,
            item,
            kind,
        });
        self.refresh_meal(placement);
    }

    /// Remove the extra at `index` and rebuild its meal.
    pub fn detach(&mut self, index: usize) -> Option<Extra> {
        if index >= self.extras.len() {
            return None;
        }
        let extra = self.extras.remove(index);
        self.refresh_meal(extra.placement);
        Some(extra)
    }

    pub fn meal(&self, placement: Placement) -> Option<&Meal> {
        self.days
            .get(placement.day)
            .and_then(|d| d.meals.get(placement.meal))
    }

    fn refresh_meal(&mut self, placement: Placement) {
        let attached: Vec<&Extra> = self
            .extras
            .iter()
            .filter(|e| e.placement == placement)
            .collect();

        let macros = meal_macros(
            self.meal(placement).map(|m| m.base_macros).unwrap_or_default(),
            attached.iter().copied(),
        );
        let sides: Vec<&str> = attached
            .iter()
            .filter(|e| e.kind == ExtraKind::Side)
            .map(|e| e.item.name.as_str())
            .collect();

        let Some(meal) = self
            .days
            .get_mut(placement.day)
            .and_then(|d| d.meals.get_mut(placement.meal))
        else {
            return;
        };

        meal.macros = macros;
        meal.title = std::iter::once(meal.base_title.as_str())
            .chain(sides)
            .collect::<Vec<_>>()
            .join(" + ");

        self.refresh_day(placement.day);
    }

    /// Recompute a day's cached protein and calorie totals from its meals.
    pub fn refresh_day(&mut self, day: usize) {
        if let Some(d) = self.days.get_mut(day) {
            let (protein, calories) = recompute_day(d);
            d.total_protein = protein;
            d.total_calories = calories;
        }
    }

    /// Rebuild every meal and day from base items and extras.
    pub fn refresh_all(&mut self) {
        for day in 0..self.days.len() {
            for meal in 0..self.days[day].meals.len() {
                self.refresh_meal(Placement::new(day, meal));
            }
            self.refresh_day(day);
        }
    }

    pub fn day_totals(&self, day: usize) -> MacroProfile {
        self.days.get(day).map(Day::totals).unwrap_or_default()
    }

    /// Index of the lowest-calorie meal of a day; first one wins ties.
    pub fn lightest_meal(&self, day: usize) -> Option<usize> {
        let meals = &self.days.get(day)?.meals;
        meals
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.macros.calories.total_cmp(&b.macros.calories))
            .map(|(i, _)| i)
    }

    /// Indices into `extras` of everything attached to `day`.
    pub fn extras_for_day(&self, day: usize) -> Vec<usize> {
        self.extras
            .iter()
            .enumerate()
            .filter(|(_, e)| e.placement.day == day)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn base_cost(&self) -> Cents {
        self.base_items.iter().map(SelectedItem::price_cents).sum()
    }

    pub fn extras_cost(&self) -> Cents {
        self.extras.iter().map(|e| e.item.price_cents()).sum()
    }

    pub fn total_cost(&self) -> Cents {
        self.base_cost() + self.extras_cost()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: f64, macros: MacroProfile) -> CatalogItem {
        CatalogItem {
            name: name.to_string(),
            price,
            package: "1 ct".to_string(),
            aisle: "Snacks".to_string(),
            search_query: None,
            macros,
        }
    }

    fn one_day_plan() -> WeekPlan {
        let base = item("Chicken Bowl", 6.0, MacroProfile::new(40.0, 45.0, 12.0, 450.0));
        let mut selected = SelectedItem::ready_to_eat(base.clone());
        selected.placement = Some(Placement::new(0, 0));
        let mut plan = WeekPlan {
            days: vec![Day {
                meals: vec![
                    Meal::new(base.name.clone(), base.macros),
                    Meal::new("Oats", MacroProfile::new(10.0, 50.0, 5.0, 300.0)),
                ],
                ..Default::default()
            }],
            base_items: vec![selected],
            extras: Vec::new(),
        };
        plan.refresh_all();
        plan
    }

    #[test]
    fn test_attach_updates_meal_and_day() {
        let mut plan = one_day_plan();
        let side = item("Cheese Stick", 0.75, MacroProfile::new(7.0, 1.0, 6.0, 80.0));
        plan.attach(Placement::new(0, 0), side, ExtraKind::Side);

        let meal = &plan.days[0].meals[0];
        assert_eq!(meal.title, "Chicken Bowl + Cheese Stick");
        assert_eq!(meal.macros.calories, 530.0);
        assert_eq!(plan.days[0].total_calories, 830.0);
        assert_eq!(plan.days[0].total_protein, 57.0);
    }

    #[test]
    fn test_detach_leaves_no_phantom_grams() {
        let mut plan = one_day_plan();
        let before = plan.days[0].meals[0].clone();
        let big = item("Trail Mix", 2.0, MacroProfile::new(6.0, 30.0, 20.0, 320.0));
        plan.attach(Placement::new(0, 0), big, ExtraKind::Filler);
        plan.detach(0).unwrap();

        assert_eq!(plan.days[0].meals[0], before);
        assert!(plan.extras.is_empty());
    }

    #[test]
    fn test_filler_does_not_change_title() {
        let mut plan = one_day_plan();
        let shake = item("Shake", 3.0, MacroProfile::new(30.0, 3.0, 2.0, 160.0));
        plan.attach(Placement::new(0, 1), shake, ExtraKind::Filler);
        assert_eq!(plan.days[0].meals[1].title, "Oats");
    }

    #[test]
    fn test_lightest_meal_first_wins_ties() {
        let mut plan = one_day_plan();
        plan.days[0].meals[1] = Meal::new("Twin", MacroProfile::new(40.0, 45.0, 12.0, 450.0));
        plan.refresh_all();
        assert_eq!(plan.lightest_meal(0), Some(0));
    }

    #[test]
    fn test_costs_in_cents() {
        let mut plan = one_day_plan();
        let side = item("Apple", 0.35, MacroProfile::new(0.0, 25.0, 0.0, 95.0));
        plan.attach(Placement::new(0, 1), side, ExtraKind::Side);
        assert_eq!(plan.base_cost(), Cents(600));
        assert_eq!(plan.extras_cost(), Cents(35));
        assert_eq!(plan.total_cost(), Cents(635));
        assert_eq!(plan.extras_for_day(0), vec![0]);
    }
}
