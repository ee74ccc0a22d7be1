use super::entities::{PriceTier, Seat, SeatMapData, Section};
use super::value_objects::{SeatId, TierId};
use std::collections::HashMap;
use std::sync::Arc;

/// A seat together with the section that owns it
#[derive(Debug, Clone, Copy)]
pub struct SeatRef<'a> {
    pub seat: &'a Seat,
    pub section: &'a Section,
}

/// Read-only index over a loaded venue document.
///
/// Cloning is cheap: the document itself sits behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct SeatCatalog {
    data: Arc<SeatMapData>,
    tiers: Arc<HashMap<TierId, usize>>,
    seats: Arc<HashMap<SeatId, (usize, usize)>>,
}

impl SeatCatalog {
    pub fn new(data: SeatMapData) -> Self {
        let mut tiers = HashMap::with_capacity(data.price_tiers.len());
        for (idx, tier) in data.price_tiers.iter().enumerate() {
            tiers.entry(tier.id.clone()).or_insert(idx);
        }

        let mut seats = HashMap::new();
        for (section_idx, section) in data.sections.iter().enumerate() {
            for (seat_idx, seat) in section.seats.iter().enumerate() {
                // a later duplicate of an id replaces the earlier one
                seats.insert(seat.id.clone(), (section_idx, seat_idx));
            }
        }

        Self { data: Arc::new(data), tiers: Arc::new(tiers), seats: Arc::new(seats) }
    }

    pub fn data(&self) -> &SeatMapData {
        &self.data
    }

    pub fn tiers(&self) -> &[PriceTier] {
        &self.data.price_tiers
    }

    pub fn sections(&self) -> &[Section] {
        &self.data.sections
    }

    /// Tier lookup may miss; callers pick their own fallback.
    pub fn tier(&self, id: &TierId) -> Option<&PriceTier> {
        self.tiers.get(id).map(|&idx| &self.data.price_tiers[idx])
    }

    pub fn seat(&self, id: &SeatId) -> Option<SeatRef<'_>> {
        self.seats.get(id).map(|&(section_idx, seat_idx)| {
            let section = &self.data.sections[section_idx];
            SeatRef { seat: &section.seats[seat_idx], section }
        })
    }

    /// All seats in document order
    pub fn seats(&self) -> impl Iterator<Item = SeatRef<'_>> {
        self.data
            .sections
            .iter()
            .flat_map(|section| section.seats.iter().map(move |seat| SeatRef { seat, section }))
    }

    pub fn seat_count(&self) -> usize {
        self.data.sections.iter().map(|s| s.seats.len()).sum()
    }

    /// Seats whose tier id resolves to nothing.
    pub fn dangling_tier_refs(&self) -> Vec<&Seat> {
        self.seats()
            .filter(|r| self.tier(&r.seat.price_tier_id).is_none())
            .map(|r| r.seat)
            .collect()
    }
}

/// Two catalogs are equal when they index the same loaded document.
impl PartialEq for SeatCatalog {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::venue::value_objects::{Price, SeatStatus};

    fn seat(id: &str, tier: &str) -> Seat {
        Seat {
            id: id.into(),
            row: "A".into(),
            number: 1,
            x: 0.0,
            y: 0.0,
            price_tier_id: tier.into(),
            status: SeatStatus::Available,
            is_restricted_view: false,
        }
    }

    fn catalog() -> SeatCatalog {
        SeatCatalog::new(SeatMapData {
            price_tiers: vec![PriceTier {
                id: "A".into(),
                price: Price::new(1000),
                color: "#f00".into(),
                name: "Gold".into(),
            }],
            sections: vec![
                Section {
                    id: "left".into(),
                    name: "Left".into(),
                    label_position: None,
                    seats: vec![seat("s1", "A"), seat("s2", "ghost")],
                },
                Section {
                    id: "right".into(),
                    name: "Right".into(),
                    label_position: None,
                    seats: vec![seat("s1", "A"), seat("s3", "A")],
                },
            ],
            ..Default::default()
        })
    }

    #[test]
    fn lookup_joins_section() {
        let catalog = catalog();
        let found = catalog.seat(&"s3".into()).unwrap();
        assert_eq!(found.section.name, "Right");
        assert!(catalog.seat(&"nope".into()).is_none());
    }

    #[test]
    fn duplicate_seat_id_resolves_to_last() {
        let catalog = catalog();
        assert_eq!(catalog.seat(&"s1".into()).unwrap().section.name, "Right");
        assert_eq!(catalog.seat_count(), 4);
    }

    #[test]
    fn clones_compare_equal_reloads_do_not() {
        let catalog = catalog();
        assert_eq!(catalog.clone(), catalog);
        assert_ne!(SeatCatalog::new(SeatMapData::default()), SeatCatalog::new(SeatMapData::default()));
    }

    #[test]
    fn dangling_tiers_are_reported_not_rejected() {
        let catalog = catalog();
        let dangling = catalog.dangling_tier_refs();
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].id.as_str(), "s2");
        assert!(catalog.tier(&"ghost".into()).is_none());
    }
}
