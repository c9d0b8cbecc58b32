//! Derived colony resources.
//!
//! Resources are never edited directly: they are recomputed from the placed
//! modules after every change to the habitat, so undo/redo and loading a save
//! always produce gauges consistent with what is on the map.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{BASELINE_RESOURCE, CRITICAL_RESOURCE_THRESHOLD, LOW_RESOURCE_THRESHOLD};

use super::{ItemKind, PlacedItem, ResourceImpact};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Oxygen,
    Power,
    Water,
    Food,
}

impl ResourceKind {
    pub fn display_name(self) -> &'static str {
        match self {
            ResourceKind::Oxygen => "Oxygen",
            ResourceKind::Power => "Power",
            ResourceKind::Water => "Water",
            ResourceKind::Food => "Food",
        }
    }

    pub fn all() -> &'static [ResourceKind] {
        &[
            ResourceKind::Oxygen,
            ResourceKind::Power,
            ResourceKind::Water,
            ResourceKind::Food,
        ]
    }
}

/// The four colony quantities. Values are not clamped; gauges clamp for display.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceVector {
    pub oxygen: i32,
    pub power: i32,
    pub water: i32,
    pub food: i32,
}

/// The resources of an empty habitat
impl Default for ResourceVector {
    fn default() -> Self {
        Self::compute(&[])
    }
}

impl ResourceVector {
    pub fn baseline(value: i32) -> Self {
        Self {
            oxygen: value,
            power: value,
            water: value,
            food: value,
        }
    }

    /// Resources for a collection, starting from the default baseline
    pub fn compute(items: &[PlacedItem]) -> Self {
        Self::compute_from(BASELINE_RESOURCE, items)
    }

    /// Sum of every item's catalog impact on top of `baseline`.
    /// Plain addition, so the result does not depend on item order.
    pub fn compute_from(baseline: i32, items: &[PlacedItem]) -> Self {
        items
            .iter()
            .fold(Self::baseline(baseline), |total, item| {
                total.apply(&item.kind.entry().resource_impact)
            })
    }

    pub fn apply(self, impact: &ResourceImpact) -> Self {
        Self {
            oxygen: self.oxygen.saturating_add(impact.oxygen),
            power: self.power.saturating_add(impact.power),
            water: self.water.saturating_add(impact.water),
            food: self.food.saturating_add(impact.food),
        }
    }

    pub fn get(&self, kind: ResourceKind) -> i32 {
        match kind {
            ResourceKind::Oxygen => self.oxygen,
            ResourceKind::Power => self.power,
            ResourceKind::Water => self.water,
            ResourceKind::Food => self.food,
        }
    }

    pub fn lowest(&self) -> i32 {
        self.oxygen.min(self.power).min(self.water).min(self.food)
    }

    pub fn any_below(&self, threshold: i32) -> bool {
        self.lowest() < threshold
    }

    /// Rounded mean of the four quantities
    pub fn average(&self) -> i32 {
        let sum = [self.power, self.water, self.food]
            .into_iter()
            .fold(i64::from(self.oxygen), |sum, value| sum + i64::from(value));
        (sum as f64 / 4.0).round() as i32
    }
}

/// Gauge fill in [0, 100]
pub fn display_percent(value: i32) -> f32 {
    value.clamp(0, 100) as f32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceLevel {
    Normal,
    Low,
    Critical,
}

impl ResourceLevel {
    pub fn of(value: i32) -> Self {
        let clamped = value.clamp(0, 100);
        if clamped < CRITICAL_RESOURCE_THRESHOLD {
            ResourceLevel::Critical
        } else if clamped < LOW_RESOURCE_THRESHOLD {
            ResourceLevel::Low
        } else {
            ResourceLevel::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sustainability {
    Excellent,
    Good,
    Fair,
    Critical,
}

impl Sustainability {
    pub fn of(resources: &ResourceVector) -> Self {
        match resources.average() {
            avg if avg >= 50 => Sustainability::Excellent,
            avg if avg >= 30 => Sustainability::Good,
            avg if avg >= 15 => Sustainability::Fair,
            _ => Sustainability::Critical,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Sustainability::Excellent => "Excellent",
            Sustainability::Good => "Good",
            Sustainability::Fair => "Fair",
            Sustainability::Critical => "Critical",
        }
    }
}

/// Summary shown in the statistics panel
#[derive(Debug, Clone, PartialEq)]
pub struct ColonyStatistics {
    pub module_count: usize,
    /// Count per kind, in catalog order, kinds with no modules omitted
    pub breakdown: Vec<(ItemKind, usize)>,
    pub average: i32,
    pub sustainability: Sustainability,
}

impl ColonyStatistics {
    pub fn gather(items: &[PlacedItem], resources: &ResourceVector) -> Self {
        let breakdown = ItemKind::all()
            .iter()
            .map(|kind| (*kind, items.iter().filter(|i| i.kind == *kind).count()))
            .filter(|(_, count)| *count > 0)
            .collect();

        Self {
            module_count: items.len(),
            breakdown,
            average: resources.average(),
            sustainability: Sustainability::of(resources),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habitat::PlacedItemId;

    fn item(id: u64, kind: ItemKind) -> PlacedItem {
        PlacedItem::new(PlacedItemId(id), kind, 0.0, 0.0)
    }

    #[test]
    fn test_empty_collection_is_baseline() {
        let resources = ResourceVector::compute(&[]);
        assert_eq!(
            resources,
            ResourceVector {
                oxygen: 50,
                power: 50,
                water: 50,
                food: 50
            }
        );
    }

    #[test]
    fn test_single_dome() {
        let resources = ResourceVector::compute(&[item(1, ItemKind::Dome)]);
        assert_eq!(
            resources,
            ResourceVector {
                oxygen: 55,
                power: 40,
                water: 50,
                food: 50
            }
        );
    }

    #[test]
    fn test_order_does_not_matter() {
        let items = vec![
            item(1, ItemKind::Dome),
            item(2, ItemKind::Plant),
            item(3, ItemKind::Bed),
            item(4, ItemKind::Solar),
            item(5, ItemKind::Water),
            item(6, ItemKind::Plant),
        ];
        let expected = ResourceVector::compute(&items);

        let mut reversed = items.clone();
        reversed.reverse();
        assert_eq!(ResourceVector::compute(&reversed), expected);

        let mut rotated = items.clone();
        rotated.rotate_left(2);
        assert_eq!(ResourceVector::compute(&rotated), expected);
    }

    #[test]
    fn test_values_are_not_clamped() {
        let items: Vec<_> = (0..8).map(|i| item(i, ItemKind::Dome)).collect();
        let resources = ResourceVector::compute(&items);
        assert_eq!(resources.power, -30);
        assert_eq!(resources.oxygen, 90);

        let solar: Vec<_> = (0..4).map(|i| item(i, ItemKind::Solar)).collect();
        assert_eq!(ResourceVector::compute(&solar).power, 150);
    }

    #[test]
    fn test_custom_baseline() {
        let resources = ResourceVector::compute_from(10, &[item(1, ItemKind::Water)]);
        assert_eq!(resources.water, 30);
        assert_eq!(resources.power, 7);
        assert!(resources.any_below(LOW_RESOURCE_THRESHOLD));
    }

    #[test]
    fn test_lowest_and_any_below() {
        let resources = ResourceVector {
            oxygen: 60,
            power: 19,
            water: 40,
            food: 20,
        };
        assert_eq!(resources.lowest(), 19);
        assert!(resources.any_below(20));
        assert!(!resources.any_below(19));
    }

    #[test]
    fn test_display_percent_clamps() {
        assert_eq!(display_percent(-15), 0.0);
        assert_eq!(display_percent(42), 42.0);
        assert_eq!(display_percent(180), 100.0);
    }

    #[test]
    fn test_resource_levels() {
        assert_eq!(ResourceLevel::of(50), ResourceLevel::Normal);
        assert_eq!(ResourceLevel::of(20), ResourceLevel::Normal);
        assert_eq!(ResourceLevel::of(19), ResourceLevel::Low);
        assert_eq!(ResourceLevel::of(9), ResourceLevel::Critical);
        assert_eq!(ResourceLevel::of(-40), ResourceLevel::Critical);
    }

    #[test]
    fn test_sustainability_thresholds() {
        assert_eq!(
            Sustainability::of(&ResourceVector::baseline(50)),
            Sustainability::Excellent
        );
        assert_eq!(
            Sustainability::of(&ResourceVector::baseline(30)),
            Sustainability::Good
        );
        assert_eq!(
            Sustainability::of(&ResourceVector::baseline(15)),
            Sustainability::Fair
        );
        assert_eq!(
            Sustainability::of(&ResourceVector::baseline(14)),
            Sustainability::Critical
        );
    }

    #[test]
    fn test_statistics_breakdown_in_catalog_order() {
        let items = vec![
            item(1, ItemKind::Plant),
            item(2, ItemKind::Dome),
            item(3, ItemKind::Plant),
        ];
        let resources = ResourceVector::compute(&items);
        let stats = ColonyStatistics::gather(&items, &resources);
        assert_eq!(stats.module_count, 3);
        assert_eq!(
            stats.breakdown,
            vec![(ItemKind::Dome, 1), (ItemKind::Plant, 2)]
        );
        assert_eq!(stats.average, resources.average());
    }

    #[test]
    fn test_extreme_baseline_saturates() {
        let resources = ResourceVector::compute_from(i32::MAX, &[item(1, ItemKind::Dome)]);
        assert_eq!(resources.oxygen, i32::MAX);
        assert_eq!(resources.power, i32::MAX - 10);
        assert_eq!(ResourceVector::baseline(i32::MAX).average(), i32::MAX);
    }
}
