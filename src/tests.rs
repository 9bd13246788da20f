#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::builder::{BuilderInvalidReason, NetworkBuilder};
    use crate::parse::{DistanceRecord, ParseRecordError};
    use crate::Network;

    fn worked_example() -> Network {
        NetworkBuilder::default()
            .add_distance("London", "Dublin", 464)
            .add_distance("London", "Belfast", 518)
            .add_distance("Dublin", "Belfast", 141)
            .build()
            .unwrap()
    }

    #[test]
    fn parse_record() {
        assert_eq!("London to Dublin = 464".parse::<DistanceRecord>(), Ok(DistanceRecord {
            from: "London".to_owned(),
            to: "Dublin".to_owned(),
            distance: 464,
        }));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!("London Dublin = 464".parse::<DistanceRecord>(), Err(ParseRecordError::Malformed("London Dublin = 464".to_owned())));
        assert_eq!("London to Dublin".parse::<DistanceRecord>(), Err(ParseRecordError::Malformed("London to Dublin".to_owned())));
        assert_eq!("to Dublin = 464".parse::<DistanceRecord>(), Err(ParseRecordError::Malformed("to Dublin = 464".to_owned())));
        assert_eq!("London to Dublin = banana".parse::<DistanceRecord>(), Err(ParseRecordError::BadDistance("banana".to_owned())));
    }

    #[test]
    fn display_round_trips_input() {
        let network = worked_example();

        assert_eq!(format!("{}", network), "London to Dublin = 464
London to Belfast = 518
Dublin to Belfast = 141
");
    }

    #[test]
    fn solve_worked_example() {
        let network = worked_example();
        let extremes = network.extremes().unwrap();

        assert_eq!(extremes.shortest.total(), 605);
        assert_eq!(network.describe(&extremes.shortest), "London -> Dublin -> Belfast");
        assert_eq!(extremes.longest.total(), 982);
        assert_eq!(network.describe(&extremes.longest), "Dublin -> London -> Belfast");
    }

    #[test]
    fn solve_from_parsed_records() {
        let input = "London to Dublin = 464
London to Belfast = 518
Dublin to Belfast = 141";

        let mut builder = NetworkBuilder::default();
        for line in input.lines() {
            builder.add_record(&line.parse::<DistanceRecord>().unwrap());
        }

        let extremes = builder.build().unwrap().extremes().unwrap();
        assert_eq!((extremes.shortest.total(), extremes.longest.total()), (605, 982));
    }

    #[test]
    fn single_location_is_a_vacuous_route() {
        let network = NetworkBuilder::default()
            .add_location("London")
            .build()
            .unwrap();

        let extremes = network.extremes().unwrap();
        assert_eq!(extremes.shortest, extremes.longest);
        assert_eq!(extremes.shortest.total(), 0);
        assert_eq!(network.describe(&extremes.shortest), "London");
    }

    #[test]
    fn empty_network_has_no_route() {
        let network = NetworkBuilder::default().build().unwrap();

        assert_eq!(network.location_count(), 0);
        assert!(network.extremes().is_none());
    }

    #[test]
    fn equal_weight_triangle() {
        // every complete route uses exactly two of the three segments
        let extremes = NetworkBuilder::default()
            .add_distance("A", "B", 1)
            .add_distance("B", "C", 1)
            .add_distance("A", "C", 1)
            .build()
            .unwrap()
            .extremes()
            .unwrap();

        assert_eq!(extremes.shortest.total(), 2);
        assert_eq!(extremes.longest.total(), 2);
    }

    #[test]
    fn self_loop_is_never_taken() {
        let extremes = NetworkBuilder::default()
            .add_distance("A", "B", 1)
            .add_distance("B", "C", 1)
            .add_distance("A", "C", 1)
            .add_distance("A", "A", 99)
            .build()
            .unwrap()
            .extremes()
            .unwrap();

        assert_eq!((extremes.shortest.total(), extremes.longest.total()), (2, 2));
    }

    #[test]
    fn disconnected_network_has_no_route() {
        let network = NetworkBuilder::default()
            .add_distance("A", "B", 3)
            .add_distance("C", "D", 4)
            .build()
            .unwrap();

        assert!(network.extremes().is_none());
    }

    #[test]
    fn endpoint_order_does_not_matter() {
        let swapped = NetworkBuilder::default()
            .add_distance("Dublin", "London", 464)
            .add_distance("Belfast", "London", 518)
            .add_distance("Belfast", "Dublin", 141)
            .build()
            .unwrap()
            .extremes()
            .unwrap();

        let extremes = worked_example().extremes().unwrap();
        assert_eq!(swapped.shortest.total(), extremes.shortest.total());
        assert_eq!(swapped.longest.total(), extremes.longest.total());
    }

    #[test]
    fn solving_is_idempotent() {
        let network = worked_example();

        assert_eq!(network.extremes(), network.extremes());
    }

    #[test]
    fn duplicate_distance_invalidates() {
        let mut builder = NetworkBuilder::default();
        builder
            .add_distance("London", "Dublin", 464)
            .add_distance("Dublin", "London", 400)
            // ignored; the builder is already invalid
            .add_distance("London", "Belfast", 518);

        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::DuplicateDistance]));
        assert!(builder.build().is_err());
    }

    fn complete_four(skip_pair: Option<(&str, &str)>) -> Network {
        let mut builder = NetworkBuilder::default();
        for (from, to, distance) in [
            ("A", "B", 1),
            ("A", "C", 2),
            ("A", "D", 3),
            ("B", "C", 4),
            ("B", "D", 5),
            ("C", "D", 6),
        ] {
            if skip_pair == Some((from, to)) {
                continue;
            }
            builder.add_distance(from, to, distance);
        }

        builder.build().unwrap()
    }

    #[test]
    fn removing_a_segment_only_tightens() {
        let full = complete_four(None).extremes().unwrap();
        let reduced = complete_four(Some(("B", "C"))).extremes().unwrap();

        assert!(reduced.shortest.total() >= full.shortest.total());
        assert!(reduced.longest.total() <= full.longest.total());
    }

    #[test]
    fn matches_permutation_oracle() {
        let mut builder = NetworkBuilder::default();
        for (from, to, distance) in [
            ("A", "B", 5),
            ("A", "C", 12),
            ("A", "D", 7),
            ("A", "E", 3),
            ("B", "C", 9),
            ("B", "D", 14),
            ("B", "E", 4),
            ("C", "D", 8),
            ("C", "E", 11),
            ("D", "E", 6),
        ] {
            builder.add_distance(from, to, distance);
        }
        let network = builder.build().unwrap();

        // the network is complete, so every visiting order is a valid route
        let (oracle_min, oracle_max) = network.locations()
            .permutations(network.location_count())
            .map(|order| order.windows(2)
                .map(|leg| network.distance_between(leg[0], leg[1]).unwrap())
                .sum::<u64>())
            .minmax()
            .into_option()
            .unwrap();

        let extremes = network.extremes().unwrap();
        assert_eq!(extremes.shortest.total(), oracle_min);
        assert_eq!(extremes.longest.total(), oracle_max);

        // both itineraries visit every location exactly once
        for itinerary in [&extremes.shortest, &extremes.longest] {
            assert_eq!(itinerary.stops().iter().copied().sorted().collect_vec(), network.locations().sorted().collect_vec());
        }
    }
}
