use assert_float_eq::assert_float_absolute_eq;

use cut_planner_rs::models::{Cents, Goal, Macro, MacroProfile, PlanRequest, Target};
use cut_planner_rs::planner::{day_penalty, is_converged, macro_gap, ready_to_eat_ratio};

fn request(goal: Goal, bodyweight: u32) -> PlanRequest {
    PlanRequest {
        goal,
        bodyweight,
        ..Default::default()
    }
}

#[test]
fn test_fat_loss_scenario() {
    let target = Target::from_request(&request(Goal::FatLoss, 185));

    assert_eq!(target.calories, 2035);
    assert_eq!(target.protein_g, 185);
    assert_eq!(target.protein_cap, 204);
    assert_eq!(target.per_meal_calories(4), 508);
}

#[test]
fn test_goal_multipliers() {
    assert_eq!(Target::from_request(&request(Goal::Recomp, 200)).calories, 2400);
    assert_eq!(Target::from_request(&request(Goal::Maintenance, 200)).calories, 2800);
}

#[test]
fn test_calorie_override_wins() {
    let req = PlanRequest {
        calories_override: Some(1800),
        ..request(Goal::Maintenance, 185)
    };
    let target = Target::from_request(&req);
    assert_eq!(target.calories, 1800);
    // Protein still follows bodyweight
    assert_eq!(target.protein_g, 185);
}

#[test]
fn test_protein_cap_never_below_floor() {
    for bw in [1, 9, 10, 99, 150, 185, 333] {
        let target = Target::from_request(&request(Goal::FatLoss, bw));
        assert!(target.protein_cap >= target.protein_g, "bodyweight {}", bw);
    }
}

#[test]
fn test_low_carb_shares() {
    let req = PlanRequest {
        low_carb: true,
        ..Default::default()
    };
    let target = Target::from_request(&req);
    assert_float_absolute_eq!(target.shares.protein, 0.45, 1e-12);
    assert_float_absolute_eq!(target.shares.carbs, 0.20, 1e-12);
    assert_float_absolute_eq!(target.shares.fat, 0.35, 1e-12);
}

#[test]
fn test_ready_to_eat_ratio_threshold() {
    assert_float_absolute_eq!(ready_to_eat_ratio(10), 0.75, 1e-12);
    assert_float_absolute_eq!(ready_to_eat_ratio(11), 0.6, 1e-12);
}

#[test]
fn test_converged_day() {
    let target = Target::from_request(&PlanRequest::default());
    // 2035 kcal at 40/30/30 with protein inside the floor..cap band
    let day = MacroProfile::new(195.0, 152.6, 67.8, 2035.0);

    assert!(is_converged(&day, &target));
    assert!(day_penalty(&day, &target) < 1.0);
}

#[test]
fn test_gap_points_at_short_macro() {
    let target = Target::from_request(&PlanRequest::default());
    let low_fat = MacroProfile::new(190.0, 200.0, 20.0, 1800.0);
    assert_eq!(macro_gap(&low_fat, &target), Macro::Fat);
}

#[test]
fn test_empty_day_penalty_is_huge() {
    let target = Target::from_request(&PlanRequest::default());
    assert!(day_penalty(&MacroProfile::default(), &target) >= 1e9);
}

#[test]
fn test_budget_display() {
    assert_eq!(PlanRequest::default().budget, Cents(18_000));
    assert_eq!(Cents(18_000).to_string(), "$180.00");
}
