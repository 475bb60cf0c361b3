// ─────────────────────────────────────────────────────────────────────────────
// Plan shape
// ─────────────────────────────────────────────────────────────────────────────

/// Days in a plan.
pub const PLAN_DAYS: usize = 7;

/// Largest bodyweight (lb) a request may carry.
pub const MAX_BODYWEIGHT_LB: u32 = 1_000;

pub const MAX_MEALS_PER_DAY: u32 = 12;

// ─────────────────────────────────────────────────────────────────────────────
// Iteration ceilings
// ─────────────────────────────────────────────────────────────────────────────

/// Greedy selection guard.
pub const SELECTION_GUARD: usize = 10_000;

/// Round-robin reuse guard once the sorted pools run dry.
pub const ROUND_ROBIN_GUARD: usize = 1_000;

/// Balancer iterations per day.
pub const BALANCE_ITERATIONS: usize = 160;

// ─────────────────────────────────────────────────────────────────────────────
// Item scorer
// ─────────────────────────────────────────────────────────────────────────────

/// Weight of the per-meal calorie deviation.
pub const SCORE_CALORIE_WEIGHT: f64 = 0.55;

/// Weight of the price per 25 g protein term.
pub const SCORE_PRICE_WEIGHT: f64 = 0.45;

/// Protein grams the price-efficiency term is normalised to.
pub const PROTEIN_UNIT_G: f64 = 25.0;

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Carb ceiling for ready-to-eat items in low-carb mode; recipes get twice this.
pub const LOW_CARB_MAX_G: f64 = 20.0;

/// Cook-time tolerance above which fewer convenience items are used.
pub const COOK_TIME_THRESHOLD_MIN: u32 = 10;

/// Ready-to-eat share when the user tolerates cooking.
pub const RTE_RATIO_COOKING: f64 = 0.6;

/// Ready-to-eat share otherwise.
pub const RTE_RATIO_CONVENIENCE: f64 = 0.75;

// ─────────────────────────────────────────────────────────────────────────────
// Assembly (sides)
// ─────────────────────────────────────────────────────────────────────────────

pub const SIDE_MIN_KCAL: f64 = 60.0;
pub const SIDE_MAX_KCAL: f64 = 350.0;

/// Sides are attached while the meal is more than this under target.
pub const SIDE_UNDER_TARGET_KCAL: f64 = 30.0;

/// A side may not push the meal more than this over target.
pub const SIDE_OVERSHOOT_KCAL: f64 = 200.0;

/// Side attachments per meal.
pub const MAX_SIDE_ATTACHMENTS: usize = 6;

// ─────────────────────────────────────────────────────────────────────────────
// Macro balancer
// ─────────────────────────────────────────────────────────────────────────────

/// Calorie band half-width as a fraction of target.
pub const CALORIE_TOLERANCE: f64 = 0.05;

/// Allowed deviation of each calorie share from its target.
pub const SHARE_TOLERANCE: f64 = 0.04;

/// Hard ceiling on a single filler's calories.
pub const FILLER_MAX_KCAL: f64 = 350.0;

/// Slack over the remaining calorie headroom a filler may use.
pub const FILLER_HEADROOM_SLACK_KCAL: f64 = 200.0;

pub const PENALTY_CALORIE_WEIGHT: f64 = 3.0;
pub const PENALTY_PROTEIN_FLOOR_WEIGHT: f64 = 4.0;
pub const PENALTY_PROTEIN_CAP_WEIGHT: f64 = 8.0;

/// Penalty of a day with no calories at all.
pub const EMPTY_DAY_PENALTY: f64 = 1e9;

// Filler pools
pub const BOOSTER_MIN_PROTEIN_G: f64 = 25.0;
pub const BOOSTER_MAX_KCAL: f64 = 230.0;
pub const CARB_FILLER_MIN_G: f64 = 25.0;
pub const FAT_FILLER_MIN_G: f64 = 10.0;
pub const BALANCED_PROTEIN_G: (f64, f64) = (12.0, 24.0);
pub const BALANCED_CARB_G: (f64, f64) = (15.0, 35.0);
pub const MICRO_MAX_KCAL: f64 = 120.0;

/// Low-carb substitutes for the carb pool.
pub const LOW_CARB_BALANCED_MAX_CARB_G: f64 = 18.0;
pub const LOW_CARB_MICRO_MAX_CARB_G: f64 = 10.0;

// ─────────────────────────────────────────────────────────────────────────────
// Budget
// ─────────────────────────────────────────────────────────────────────────────

/// Top-up stops once headroom is at or below this many cents.
pub const TOP_UP_MIN_HEADROOM_CENTS: i64 = 25;

/// Days at or above this fraction of target are not topped up.
pub const TOP_UP_CALORIE_FLOOR: f64 = 0.95;

/// Minimum calories for a top-up filler.
pub const TOP_UP_MIN_KCAL: f64 = 60.0;

/// Price floor in the calories-per-dollar score.
pub const TOP_UP_MIN_PRICE: f64 = 0.01;

// ─────────────────────────────────────────────────────────────────────────────
// Groceries
// ─────────────────────────────────────────────────────────────────────────────

/// Ingredients listed per recipe.
pub const RECIPE_INGREDIENTS_LISTED: usize = 4;

/// Package label for recipe ingredients.
pub const RECIPE_PACKAGE: &str = "varies";

pub const DEFAULT_HOUSEHOLD: u32 = 1;

pub const DEFAULT_SEARCH_CAMPAIGN: &str = "corporate-cut";

pub const SEARCH_BASE_URL: &str = "https://www.instacart.com/store/s";

// ─────────────────────────────────────────────────────────────────────────────
// Plan store
// ─────────────────────────────────────────────────────────────────────────────

/// Plans kept in the store; older ones are evicted.
pub const DEFAULT_STORE_CAPACITY: usize = 1;
