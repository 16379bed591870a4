#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use indoc::indoc;

    use crate::builder::{BuilderInvalidReason, ForestBuilder};
    use crate::forest::{Forest, ParseError};
    use crate::graph::compressed_paths;
    use crate::herb::{Herb, HerbSet};
    use crate::location::{Dimension, Location};
    use crate::shape::Step;
    use crate::solver::{solve, PlanError, Status, TourSolver};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn dims(width: usize, height: usize) -> (Dimension, Dimension) {
        (NonZero::new(width).unwrap(), NonZero::new(height).unwrap())
    }

    fn herbs(displays: &str) -> HerbSet {
        displays.chars().map(|display| Herb::from_char(display).unwrap()).collect()
    }

    // .S..
    // .##.
    // .A.B
    fn small_loop() -> Forest {
        ForestBuilder::with_dims(dims(4, 3))
            .open_rect(Location(0, 0), Location(2, 3))
            .block(Location(1, 1))
            .block(Location(1, 2))
            .add_herb('A', Location(2, 1))
            .add_herb('B', Location(2, 3))
            .set_start(Location(0, 1))
            .build()
            .unwrap()
    }

    const CORRIDOR: &str = indoc! {"
        ##.######
        A...B...A
    "};

    #[test]
    fn parse_and_display() {
        let forest: Forest = indoc! {"
            #~#.#
            #A..B
            ~.#..
        "}.parse().unwrap();

        assert_eq!(forest.start(), Location(0, 3));
        assert_eq!(forest.dims(), (3, 5));
        assert_eq!(forest.herb_types(), herbs("AB"));
        assert_eq!(forest.herb_at(Location(1, 1)), Some(Herb::from_char('A').unwrap()));
        assert!(forest.is_open(Location(2, 1)));
        assert!(!forest.is_open(Location(0, 1)));
        assert!(!forest.is_open(Location(0, 5)));
        assert_eq!(format!("{}", forest), "###.#
#A..B
#.#..
");
    }

    #[test]
    fn ragged_rows_are_padded() {
        let forest: Forest = "#.#\n.A\n#.##".parse().unwrap();

        assert_eq!(forest.dims(), (3, 4));
        assert!(!forest.is_open(Location(1, 2)));
        assert_eq!(solve(&forest), Ok(2));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Forest>().unwrap_err(), ParseError::Empty);
        assert_eq!("###\n.A.".parse::<Forest>().unwrap_err(), ParseError::MissingStart);
        assert_eq!("..#\n.A.".parse::<Forest>().unwrap_err(), ParseError::AmbiguousStart {
            first: Location(0, 0),
            second: Location(0, 1),
        });
        // herbs on the first row are not starts
        assert_eq!("A#\n..".parse::<Forest>().unwrap_err(), ParseError::MissingStart);
    }

    #[test]
    fn steps_are_orthogonal() {
        let neighbors = Step::neighbors_of(Location(1, 1));
        assert_eq!(neighbors.len(), 4);
        assert!(neighbors.contains(&(Step::Up, Location(0, 1))));
        assert!(neighbors.contains(&(Step::Left, Location(1, 0))));
        assert!(!neighbors.iter().any(|(_, location)| *location == Location(0, 0)));

        // stepping off the top edge lands nowhere open
        let forest: Forest = "#.#\n#A#".parse().unwrap();
        assert!(!forest.is_open(Step::Up.attempt_from(forest.start())));
    }

    #[test]
    fn compressed_graph_of_small_loop() {
        let forest = small_loop();
        let graph = compressed_paths(&forest);
        let (start, a, b) = (Location(0, 1), Location(2, 1), Location(2, 3));

        assert_eq!(graph.weight(start, a), Some(4));
        assert_eq!(graph.weight(start, b), Some(4));
        assert_eq!(graph.weight(a, b), Some(2));
        assert_eq!(graph.weight(b, a), Some(2));
        // the way home reuses the start's edges
        assert_eq!(graph.weight(a, start), None);
        assert_eq!(graph.return_length(a), Some(4));
        assert_eq!(graph.return_length(start), Some(0));
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn same_herb_sites_are_not_connected() {
        let forest: Forest = CORRIDOR.parse().unwrap();
        let graph = compressed_paths(&forest);
        let (left, right) = (Location(1, 0), Location(1, 8));

        assert_eq!(graph.weight(left, right), None);
        assert_eq!(graph.weight(right, left), None);
        assert_eq!(graph.weight(Location(0, 2), right), Some(7));
        assert_eq!(graph.edges_from(Location(1, 4)).count(), 2);
    }

    #[test]
    fn solve_small_loop() {
        init();
        assert_eq!(solve(&small_loop()), Ok(10));
    }

    #[test]
    fn solve_single_herb_example() {
        init();
        let forest: Forest = indoc! {"
            #####.#####
            #.........#
            #.######.##
            #.........#
            ###.#.#####
            #H.......H#
            ###########
        "}.parse().unwrap();

        assert_eq!(solve(&forest), Ok(26));
    }

    #[test]
    fn solve_with_water() {
        init();
        let forest: Forest = indoc! {"
            ##########.##########
            #...................#
            #.###.##.###.##.#.#.#
            #..A#.#..~~~....#A#.#
            #.#...#.~~~~~...#.#.#
            #.#.#.#.~~~~~.#.#.#.#
            #...#.#.B~~~B...#...#
            #...#....BBB..#######
            #..E#.#...D...#..C#.#
            #.#.#.#.~~~~~.#.#.#.#
            #.#.#.#.~~~~~.#.#.#.#
            #...#.#.~~~~~...#...#
            #.####.##.##.####.#.#
            #...................#
            #####################
        "}.parse().unwrap();

        assert_eq!(forest.herb_type_count(), 5);
        assert_eq!(solve(&forest), Ok(66));
    }

    #[test]
    fn cheapest_route_to_a_state_wins() {
        let forest: Forest = CORRIDOR.parse().unwrap();
        let graph = compressed_paths(&forest);
        let solver = TourSolver::new(&forest, &graph);

        let front = solver.advance(&solver.advance(&solver.initial_front()));
        // via the near A (3 + 4) rather than the far one (7 + 4)
        let at_b = Status { location: Location(1, 4), collected: herbs("AB") };
        assert_eq!(front.get(&at_b), Some(&7));
        assert_eq!(solver.solve(), Ok(10));
    }

    #[test]
    fn one_round_per_herb() {
        let forest: Forest = indoc! {"
            #.#####
            .A.B.C.
        "}.parse().unwrap();
        let graph = compressed_paths(&forest);
        let solver = TourSolver::new(&forest, &graph);
        assert_eq!(solver.rounds(), 3);

        let mut front = solver.initial_front();
        for round in 1..=3 {
            front = solver.advance(&front);
            assert!(!front.is_empty());
            assert!(front.keys().all(|status| status.collected.len() == round));
        }
        // nothing left to pick
        assert!(solver.advance(&front).is_empty());
        assert_eq!(solver.solve(), Ok(10));
    }

    #[test]
    fn removing_edges() {
        let forest: Forest = CORRIDOR.parse().unwrap();
        let (start, near_a, b) = (Location(0, 2), Location(1, 0), Location(1, 4));

        // not on the shortest tour
        let mut graph = compressed_paths(&forest);
        assert_eq!(graph.remove_edge(start, Location(1, 8)), Some(7));
        assert_eq!(TourSolver::new(&forest, &graph).solve(), Ok(10));

        // the leg between the near A and B, in both directions
        let mut graph = compressed_paths(&forest);
        assert_eq!(graph.remove_edge(near_a, b), Some(4));
        assert_eq!(graph.remove_edge(b, near_a), Some(4));
        assert_eq!(TourSolver::new(&forest, &graph).solve(), Ok(14));

        // with no edges left between herbs nothing is ever complete
        let mut graph = compressed_paths(&forest);
        for (from, to) in [(near_a, b), (b, near_a), (b, Location(1, 8)), (Location(1, 8), b)] {
            graph.remove_edge(from, to);
        }
        assert_eq!(TourSolver::new(&forest, &graph).solve(), Err(PlanError::Unreachable { herbs: herbs("AB") }));
    }

    #[test]
    fn unreachable_herb() {
        let forest: Forest = indoc! {"
            #.###
            #..A#
            #####
            #B.C#
        "}.parse().unwrap();

        let err = solve(&forest).unwrap_err();
        assert_eq!(err, PlanError::Unreachable { herbs: herbs("BC") });
        assert_eq!(err.to_string(), "no reachable site bears herb(s) BC");
    }

    #[test]
    fn no_herbs_means_no_walk() {
        let forest: Forest = "#.#\n#.#".parse().unwrap();
        assert_eq!(forest.herb_type_count(), 0);
        assert_eq!(solve(&forest), Ok(0));
    }

    #[test]
    fn builder_rejects_bad_features() {
        let mut builder = ForestBuilder::with_dims(dims(3, 2));
        builder.open(Location(2, 0));
        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::FeatureOutOfBounds]));
        // invalid builders ignore everything afterwards
        builder.set_start(Location(0, 0));
        assert_eq!(builder.build().unwrap_err(), vec![BuilderInvalidReason::FeatureOutOfBounds]);

        let mut builder = ForestBuilder::with_dims(dims(3, 2));
        builder.add_herb('a', Location(1, 1));
        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::BadHerbLabel('a')]));

        let mut builder = ForestBuilder::with_dims(dims(3, 2));
        builder.add_herb('A', Location(1, 1)).set_start(Location(1, 1));
        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::StartOnHerb]));

        let mut builder = ForestBuilder::with_dims(dims(3, 2));
        builder.set_start(Location(0, 0)).block(Location(0, 0));
        assert_eq!(builder.build().unwrap_err(), vec![BuilderInvalidReason::NoStart]);
    }

    #[test]
    fn builder_matches_parsed_forest() {
        let parsed: Forest = "#.#\nA.B".parse().unwrap();
        let built = ForestBuilder::with_dims(dims(3, 2))
            .open(Location(0, 1))
            .open_rect(Location(1, 0), Location(1, 2))
            .add_herb('A', Location(1, 0))
            .add_herb('B', Location(1, 2))
            .set_start(Location(0, 1))
            .build()
            .unwrap();

        assert_eq!(built.to_string(), parsed.to_string());
        assert_eq!(built.herbs(), parsed.herbs());
        assert_eq!(solve(&built), solve(&parsed));
        assert_eq!(solve(&built), Ok(6));
    }
}
