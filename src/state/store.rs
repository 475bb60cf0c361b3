use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PlanError, Result};
use crate::models::PlanRequest;
use crate::planner::PlanOutcome;

/// A computed plan together with the request that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub id: Uuid,
    pub request: PlanRequest,
    #[serde(flatten)]
    pub outcome: PlanOutcome,
}

/// Keyed cache of recent plans, oldest first.
///
/// Holds at most `capacity` records; inserting beyond that evicts the
/// oldest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStore {
    capacity: usize,
    plans: Vec<PlanRecord>,
}

impl PlanStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            plans: Vec::new(),
        }
    }

    /// Store a freshly computed plan and return its id.
    pub fn insert(&mut self, request: PlanRequest, outcome: PlanOutcome) -> Uuid {
        let id = Uuid::new_v4();
        self.plans.push(PlanRecord {
            id,
            request,
            outcome,
        });
        self.evict();
        id
    }

    fn evict(&mut self) {
        if self.plans.len() > self.capacity {
            let excess = self.plans.len() - self.capacity;
            self.plans.drain(..excess);
        }
    }

    /// Change the capacity, evicting if it shrank.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.evict();
    }

    pub fn get(&self, id: &Uuid) -> Option<&PlanRecord> {
        self.plans.iter().find(|p| p.id == *id)
    }

    pub fn latest(&self) -> Option<&PlanRecord> {
        self.plans.last()
    }

    /// The named plan, or the latest when no id is given.
    pub fn resolve(&self, id: Option<&str>) -> Result<&PlanRecord> {
        match id {
            None => self.latest().ok_or(PlanError::NoPlan),
            Some(raw) => {
                let parsed = Uuid::parse_str(raw)
                    .map_err(|_| PlanError::InvalidInput(format!("not a plan id: {}", raw)))?;
                self.get(&parsed)
                    .ok_or_else(|| PlanError::PlanNotFound(raw.to_string()))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grocery::GroceryList;
    use crate::models::{Cents, Target, WeekPlan};

    fn outcome(cost: i64) -> PlanOutcome {
        PlanOutcome {
            target: Target::from_request(&PlanRequest::default()),
            plan: WeekPlan::default(),
            grocery: GroceryList::default(),
            total_cost: Cents(cost),
        }
    }

    #[test]
    fn test_empty_store_reports_no_plan() {
        let store = PlanStore::new(1);
        assert!(matches!(store.resolve(None), Err(PlanError::NoPlan)));
    }

    #[test]
    fn test_insert_and_resolve() {
        let mut store = PlanStore::new(3);
        let first = store.insert(PlanRequest::default(), outcome(100));
        let second = store.insert(PlanRequest::default(), outcome(200));

        assert_eq!(store.resolve(None).unwrap().id, second);
        let by_id = store.resolve(Some(&first.to_string())).unwrap();
        assert_eq!(by_id.outcome.total_cost, Cents(100));
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut store = PlanStore::new(1);
        let first = store.insert(PlanRequest::default(), outcome(100));
        store.insert(PlanRequest::default(), outcome(200));

        assert_eq!(store.len(), 1);
        assert!(store.get(&first).is_none());
        assert!(matches!(
            store.resolve(Some(&first.to_string())),
            Err(PlanError::PlanNotFound(_))
        ));
    }

    #[test]
    fn test_bad_id() {
        let store = PlanStore::new(1);
        assert!(matches!(
            store.resolve(Some("nope")),
            Err(PlanError::InvalidInput(_))
        ));
    }
}
