use tracing::debug;

use crate::config::PlannerConfig;
use crate::models::{Catalog, CatalogItem, Cents, Extra, ExtraKind, Macro, MacroProfile, Placement, Target, WeekPlan};
use crate::planner::constants::*;
use crate::planner::scoring::low_carb_ok;

/// How a day's correction loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceOutcome {
    /// Calorie band, protein floor/cap and shares all satisfied.
    Converged,
    /// Over the calorie band with nothing left to remove.
    CannotTrim,
    /// No candidate survived the filters.
    NoCandidate,
    /// Ran out of iterations.
    IterationLimit,
    /// The day has no meals to attach to.
    Empty,
}

/// Filler pools drawn from the ready-to-eat catalog.
#[derive(Debug)]
pub struct FillerPools<'a> {
    pub boosters: Vec<&'a CatalogItem>,
    pub carb_fillers: Vec<&'a CatalogItem>,
    pub fat_fillers: Vec<&'a CatalogItem>,
    pub balanced: Vec<&'a CatalogItem>,
    pub micro: Vec<&'a CatalogItem>,
    /// Every pool concatenated, diet-filtered.
    pub candidates: Vec<&'a CatalogItem>,
}

/// High-protein, modest-calorie item.
pub fn is_booster(item: &CatalogItem) -> bool {
    item.macros.protein >= BOOSTER_MIN_PROTEIN_G && item.macros.calories <= BOOSTER_MAX_KCAL
}

fn filter_macros(items: &[CatalogItem], pred: impl Fn(&MacroProfile) -> bool) -> Vec<&CatalogItem> {
    items.iter().filter(|i| pred(&i.macros)).collect()
}

impl<'a> FillerPools<'a> {
    pub fn new(catalog: &'a Catalog, low_carb: bool) -> Self {
        let rte = &catalog.ready_to_eat;
        let boosters: Vec<&CatalogItem> = rte.iter().filter(|i| is_booster(i)).collect();
        let carb_fillers = filter_macros(rte, |m| m.carbs >= CARB_FILLER_MIN_G);
        let fat_fillers = filter_macros(rte, |m| m.fat >= FAT_FILLER_MIN_G);
        let balanced = filter_macros(rte, |m| {
            (BALANCED_PROTEIN_G.0..=BALANCED_PROTEIN_G.1).contains(&m.protein)
                && (BALANCED_CARB_G.0..=BALANCED_CARB_G.1).contains(&m.carbs)
        });
        let micro = filter_macros(rte, |m| m.calories <= MICRO_MAX_KCAL);

        let candidates = boosters
            .iter()
            .chain(&carb_fillers)
            .chain(&fat_fillers)
            .chain(&balanced)
            .chain(&micro)
            .copied()
            .filter(|i| !low_carb || low_carb_ok(&i.macros, false))
            .collect();

        Self {
            boosters,
            carb_fillers,
            fat_fillers,
            balanced,
            micro,
            candidates,
        }
    }

    /// Preferred pool for closing a gap in `gap`.
    pub fn pool_for(&self, gap: Macro, low_carb: bool) -> Vec<&'a CatalogItem> {
        match gap {
            Macro::Protein => self.boosters.clone(),
            Macro::Carbs if low_carb => self
                .balanced
                .iter()
                .filter(|i| i.macros.carbs <= LOW_CARB_BALANCED_MAX_CARB_G)
                .chain(
                    self.micro
                        .iter()
                        .filter(|i| i.macros.carbs <= LOW_CARB_MICRO_MAX_CARB_G),
                )
                .copied()
                .collect(),
            Macro::Carbs => self.carb_fillers.clone(),
            Macro::Fat => self.fat_fillers.clone(),
        }
    }
}

/// Distance of a day's totals from target; lower is better.
///
/// Weighted sum of the relative calorie deviation, the protein shortfall
/// below the floor, the three share deviations and a steep penalty for
/// protein over the cap.
pub fn day_penalty(totals: &MacroProfile, target: &Target) -> f64 {
    let Some(shares) = totals.shares() else {
        return EMPTY_DAY_PENALTY;
    };
    let target_kcal = target.calories as f64;
    let floor = target.protein_g as f64;
    let cap = target.protein_cap as f64;

    let kcal_band = (totals.calories - target_kcal).abs() / target_kcal;
    let floor_gap = ((floor - totals.protein) / floor.max(1.0)).max(0.0);
    let over_cap = if totals.protein > cap {
        (totals.protein - cap) / cap.max(1.0) * PENALTY_PROTEIN_CAP_WEIGHT
    } else {
        0.0
    };

    kcal_band * PENALTY_CALORIE_WEIGHT
        + floor_gap * PENALTY_PROTEIN_FLOOR_WEIGHT
        + shares.total_deviation(&target.shares)
        + over_cap
}

/// Macro furthest below its target share.
///
/// Protein is never chosen once the floor is met, and is pushed even
/// further down once over the cap.
pub fn macro_gap(totals: &MacroProfile, target: &Target) -> Macro {
    let Some(now) = totals.shares() else {
        return Macro::Protein;
    };

    let mut protein_diff = target.shares.protein - now.protein;
    if totals.protein >= target.protein_g as f64 {
        protein_diff = -1e9;
    }
    if totals.protein > target.protein_cap as f64 {
        protein_diff = -1e12;
    }

    let diffs = [
        (Macro::Protein, protein_diff),
        (Macro::Carbs, target.shares.carbs - now.carbs),
        (Macro::Fat, target.shares.fat - now.fat),
    ];
    let mut best = diffs[0];
    for d in &diffs[1..] {
        if d.1 > best.1 {
            best = *d;
        }
    }
    best.0
}

/// Whether a day sits inside every tolerance at once.
pub fn is_converged(totals: &MacroProfile, target: &Target) -> bool {
    let target_kcal = target.calories as f64;
    let lower = target_kcal * (1.0 - CALORIE_TOLERANCE);
    let upper = target_kcal * (1.0 + CALORIE_TOLERANCE);
    if !(lower..=upper).contains(&totals.calories) {
        return false;
    }
    if totals.protein < target.protein_g as f64 || totals.protein > target.protein_cap as f64 {
        return false;
    }
    totals
        .shares()
        .is_some_and(|s| s.max_deviation(&target.shares) <= SHARE_TOLERANCE)
}

/// Index of the extra with the largest `key`, first one on ties.
fn first_max_extra(plan: &WeekPlan, indices: &[usize], key: impl Fn(&Extra) -> f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for &i in indices {
        let v = key(&plan.extras[i]);
        match best {
            Some((_, bv)) if bv >= v => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Correct one day towards its targets by attaching and removing extras.
///
/// Each iteration, in order: drop the most protein-heavy extra while over
/// the protein cap; stop if converged; drop the most calorie-heavy extra
/// while over the calorie band; otherwise attach the candidate filler with
/// the lowest resulting [`day_penalty`] to the lightest meal.
///
/// When `budget` is set, fillers priced above the remaining headroom are
/// skipped.
pub fn balance_day(
    plan: &mut WeekPlan,
    day: usize,
    target: &Target,
    pools: &FillerPools<'_>,
    low_carb: bool,
    budget: Option<Cents>,
    config: &PlannerConfig,
) -> BalanceOutcome {
    if plan.days.get(day).is_none_or(|d| d.meals.is_empty()) {
        return BalanceOutcome::Empty;
    }

    let target_kcal = target.calories as f64;
    let floor = target.protein_g as f64;
    let cap = target.protein_cap as f64;
    let upper = target_kcal * (1.0 + CALORIE_TOLERANCE);

    let mut outcome = BalanceOutcome::IterationLimit;
    for iteration in 0..config.balance_iterations {
        let totals = plan.day_totals(day);

        if totals.protein > cap {
            let own = plan.extras_for_day(day);
            if let Some(idx) = first_max_extra(plan, &own, |e| e.item.macros.protein) {
                if let Some(removed) = plan.detach(idx) {
                    debug!(day, iteration, item = %removed.item.name, "removed extra over protein cap");
                }
                continue;
            }
        }

        if is_converged(&totals, target) {
            outcome = BalanceOutcome::Converged;
            break;
        }

        if totals.calories > upper {
            let own = plan.extras_for_day(day);
            match first_max_extra(plan, &own, |e| e.item.macros.calories) {
                Some(idx) => {
                    if let Some(removed) = plan.detach(idx) {
                        debug!(day, iteration, item = %removed.item.name, "removed extra over calorie band");
                    }
                    continue;
                }
                None => {
                    outcome = BalanceOutcome::CannotTrim;
                    break;
                }
            }
        }

        let gap = macro_gap(&totals, target);
        let pool = pools.pool_for(gap, low_carb);
        let max_kcal = FILLER_MAX_KCAL.min(target_kcal - totals.calories + FILLER_HEADROOM_SLACK_KCAL);
        let headroom = budget.map(|b| b - plan.total_cost());

        let mut best: Option<&CatalogItem> = None;
        let mut best_penalty = f64::INFINITY;
        for cand in pool.iter().chain(&pools.candidates).copied() {
            if gap != Macro::Protein && totals.protein >= floor && is_booster(cand) {
                continue;
            }
            if low_carb && !low_carb_ok(&cand.macros, false) {
                continue;
            }
            if cand.macros.calories > max_kcal {
                continue;
            }
            if headroom.is_some_and(|h| cand.price_cents() > h) {
                continue;
            }
            let penalty = day_penalty(&(totals + cand.macros), target);
            if penalty < best_penalty {
                best_penalty = penalty;
                best = Some(cand);
            }
        }

        let Some(chosen) = best else {
            outcome = BalanceOutcome::NoCandidate;
            break;
        };
        let Some(meal) = plan.lightest_meal(day) else {
            outcome = BalanceOutcome::Empty;
            break;
        };
        debug!(day, iteration, ?gap, item = %chosen.name, penalty = best_penalty, "attached filler");
        plan.attach(Placement::new(day, meal), chosen.clone(), ExtraKind::Filler);
    }

    // The loop can stop right after an addition; never leave the day over
    // the cap while a protein-carrying extra could be dropped.
    loop {
        if plan.day_totals(day).protein <= cap {
            break;
        }
        let own: Vec<usize> = plan
            .extras_for_day(day)
            .into_iter()
            .filter(|&i| plan.extras[i].item.macros.protein > 0.0)
            .collect();
        let Some(idx) = first_max_extra(plan, &own, |e| e.item.macros.protein) else {
            break;
        };
        plan.detach(idx);
    }

    plan.refresh_day(day);
    outcome
}

/// Run [`balance_day`] over every day of the plan.
pub fn balance_week(
    plan: &mut WeekPlan,
    target: &Target,
    catalog: &Catalog,
    low_carb: bool,
    budget: Option<Cents>,
    config: &PlannerConfig,
) -> Vec<BalanceOutcome> {
    let pools = FillerPools::new(catalog, low_carb);
    let outcomes: Vec<BalanceOutcome> = (0..plan.days.len())
        .map(|day| balance_day(plan, day, target, &pools, low_carb, budget, config))
        .collect();

    debug!(
        converged = outcomes.iter().filter(|o| **o == BalanceOutcome::Converged).count(),
        days = outcomes.len(),
        "balanced week"
    );
    outcomes
}
