use skyroute_shared::Flight;
use tracing::trace;

use crate::filters::FlightFilters;
use crate::repository::FlightRepository;

/// Flight dataset held in memory for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFlightRepository {
    flights: Vec<Flight>,
}

impl InMemoryFlightRepository {
    pub fn new(flights: Vec<Flight>) -> Self {
        Self { flights }
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

impl FlightRepository for InMemoryFlightRepository {
    fn find_all(&self, filters: Option<&FlightFilters>) -> Vec<&Flight> {
        let result: Vec<&Flight> = match filters {
            Some(filters) if !filters.is_empty() => {
                self.flights.iter().filter(|f| filters.matches(f)).collect()
            }
            _ => self.flights.iter().collect(),
        };
        trace!(?filters, matched = result.len(), "flight filter applied");
        result
    }

    fn find_by_route(&self, departure: &str, arrival: &str) -> Vec<&Flight> {
        self.flights
            .iter()
            .filter(|f| {
                f.departure_station.eq_ignore_ascii_case(departure)
                    && f.arrival_station.eq_ignore_ascii_case(arrival)
            })
            .collect()
    }

    fn find_by_station(&self, station: &str) -> Vec<&Flight> {
        self.flights
            .iter()
            .filter(|f| {
                f.departure_station.eq_ignore_ascii_case(station)
                    || f.arrival_station.eq_ignore_ascii_case(station)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyroute_shared::{Bundle, Fare, Price};

    fn fare(amount: f64, remaining_tickets: u32, bundle: Bundle) -> Fare {
        Fare {
            price: Price { amount, currency_code: "GBP".to_string() },
            remaining_tickets,
            bundle,
        }
    }

    fn flight(dep: &str, arr: &str, departs: &str, fares: Vec<Fare>) -> Flight {
        Flight {
            departure_station: dep.to_string(),
            arrival_station: arr.to_string(),
            departure_date_time: departs.to_string(),
            arrival_date_time: departs.to_string(),
            fares,
        }
    }

    fn repo() -> InMemoryFlightRepository {
        InMemoryFlightRepository::new(vec![
            // 0
            flight(
                "BUD",
                "LTN",
                "2025-08-11T07:10:00.000+02:00",
                vec![fare(30.0, 2, Bundle::Basic), fare(60.0, 2, Bundle::Standard)],
            ),
            // 1
            flight(
                "LTN",
                "BUD",
                "2025-08-11T13:30:00.000+01:00",
                vec![fare(50.0, 0, Bundle::Basic), fare(200.0, 0, Bundle::Plus)],
            ),
            // 2
            flight(
                "ltn",
                "bud",
                "2025-08-12T06:05:00.000+01:00",
                vec![fare(80.0, 5, Bundle::Standard)],
            ),
            // 3
            flight(
                "STN",
                "BUD",
                "2025-08-12T09:00:00.000+01:00",
                vec![fare(45.0, 1, Bundle::Plus)],
            ),
            // 4
            flight("BUD", "STN", "2025-08-13T18:00:00.000+02:00", vec![]),
        ])
    }

    /// Positions of `found` within the repository, in result order.
    fn positions(repo: &InMemoryFlightRepository, found: &[&Flight]) -> Vec<usize> {
        found
            .iter()
            .map(|f| {
                repo.flights()
                    .iter()
                    .position(|candidate| std::ptr::eq(candidate, *f))
                    .expect("result must come from the dataset")
            })
            .collect()
    }

    #[test]
    fn test_no_filters_is_identity() {
        let repo = repo();
        assert_eq!(positions(&repo, &repo.find_all(None)), vec![0, 1, 2, 3, 4]);
        assert_eq!(
            positions(&repo, &repo.find_all(Some(&FlightFilters::default()))),
            vec![0, 1, 2, 3, 4]
        );
    }

    #[test]
    fn test_single_field_filters() {
        let repo = repo();

        let dep = FlightFilters { departure_station: Some("LTN".into()), ..Default::default() };
        assert_eq!(positions(&repo, &repo.find_all(Some(&dep))), vec![1, 2]);

        let arr = FlightFilters { arrival_station: Some("Bud".into()), ..Default::default() };
        assert_eq!(positions(&repo, &repo.find_all(Some(&arr))), vec![1, 2, 3]);

        let date = FlightFilters {
            departure_date: Some("2025-08-12".into()),
            ..Default::default()
        };
        assert_eq!(positions(&repo, &repo.find_all(Some(&date))), vec![2, 3]);

        let bundle = FlightFilters { bundle: Some(Bundle::Plus), ..Default::default() };
        assert_eq!(positions(&repo, &repo.find_all(Some(&bundle))), vec![1, 3]);

        let available = FlightFilters { available_only: Some(true), ..Default::default() };
        assert_eq!(positions(&repo, &repo.find_all(Some(&available))), vec![0, 2, 3]);

        let min = FlightFilters { min_price: Some(45.0), ..Default::default() };
        assert_eq!(positions(&repo, &repo.find_all(Some(&min))), vec![1, 2, 3]);

        let max = FlightFilters { max_price: Some(100.0), ..Default::default() };
        assert_eq!(positions(&repo, &repo.find_all(Some(&max))), vec![0, 2, 3]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let repo = repo();

        let route_and_date = FlightFilters {
            departure_station: Some("ltn".into()),
            departure_date: Some("2025-08-11".into()),
            ..Default::default()
        };
        assert_eq!(positions(&repo, &repo.find_all(Some(&route_and_date))), vec![1]);

        let bundle_and_available = FlightFilters {
            bundle: Some(Bundle::Basic),
            available_only: Some(true),
            ..Default::default()
        };
        assert_eq!(positions(&repo, &repo.find_all(Some(&bundle_and_available))), vec![0]);

        let arrival_and_max = FlightFilters {
            arrival_station: Some("BUD".into()),
            max_price: Some(60.0),
            ..Default::default()
        };
        assert_eq!(positions(&repo, &repo.find_all(Some(&arrival_and_max))), vec![3]);

        let nothing = FlightFilters {
            departure_station: Some("STN".into()),
            bundle: Some(Bundle::Basic),
            ..Default::default()
        };
        assert!(repo.find_all(Some(&nothing)).is_empty());
    }

    #[test]
    fn test_wide_price_spread_fails_max_price() {
        let repo = repo();
        let filters = FlightFilters { max_price: Some(100.0), ..Default::default() };
        let found = positions(&repo, &repo.find_all(Some(&filters)));
        // Flight 1 has a 50.0 fare but its 200.0 fare exceeds the cap.
        assert!(!found.contains(&1));
    }

    #[test]
    fn test_find_by_route_is_directional() {
        let repo = repo();
        assert_eq!(positions(&repo, &repo.find_by_route("LTN", "BUD")), vec![1, 2]);
        assert_eq!(positions(&repo, &repo.find_by_route("bud", "ltn")), vec![0]);
        assert!(repo.find_by_route("LTN", "STN").is_empty());
    }

    #[test]
    fn test_find_by_station_matches_either_end() {
        let repo = repo();
        assert_eq!(positions(&repo, &repo.find_by_station("LTN")), vec![0, 1, 2]);
        assert_eq!(positions(&repo, &repo.find_by_station("stn")), vec![3, 4]);
        assert!(repo.find_by_station("WAW").is_empty());
    }
}
