//! Unit tests for af-io.

use crate::{Farm, LoadError, LoadResult, load_farm_str};

// ── Helpers ───────────────────────────────────────────────────────────────────

const SAMPLE: &str = "\
3
##start
s 0 0
a 1 0
b 1 1
##end
e 2 0
s-a
a-e
s-b
b-e
";

fn load(text: &str) -> LoadResult<Farm> {
    load_farm_str(text)
}

fn err(text: &str) -> LoadError {
    match load(text) {
        Ok(_) => panic!("expected an error for {text:?}"),
        Err(e) => e,
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loading {
    use std::io::{Cursor, Write};

    use af_core::Coord;

    use super::*;
    use crate::{load_farm_file, load_farm_reader};

    #[test]
    fn sample_farm() {
        let farm = load(SAMPLE).unwrap();
        let g = &farm.graph;
        assert_eq!(farm.agent_count, 3);
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.name(g.start), "s");
        assert_eq!(g.name(g.end), "e");
        assert_eq!(g.coord(g.end), Some(Coord::new(2, 0)));
    }

    #[test]
    fn neighbors_follow_tunnel_order() {
        let farm = load(SAMPLE).unwrap();
        let g = &farm.graph;
        let names: Vec<&str> = g.neighbors(g.start).iter().map(|&n| g.name(n)).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn source_kept_verbatim() {
        let text = "2\n# a comment\n##start\ns 0 0\n\n##end\ne 1 1\ns-e";
        let farm = load(text).unwrap();
        assert_eq!(farm.source.len(), 8);
        assert_eq!(farm.source_text(), text);
    }

    #[test]
    fn comments_and_blank_lines_skipped() {
        let text = "# farm\n\n2\n##start\n# first room\ns 0 0\n##end\n\ne 1 1\n#tunnels\ns-e\n";
        let farm = load(text).unwrap();
        assert_eq!(farm.agent_count, 2);
        assert_eq!(farm.graph.name(farm.graph.start), "s");
        assert!(farm.graph.are_adjacent(farm.graph.start, farm.graph.end));
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        let farm = load("  1  \n##start\n s   0 0 \n##end\ne 1 1\n s-e ").unwrap();
        assert_eq!(farm.graph.edge_count(), 1);
    }

    #[test]
    fn negative_coordinates() {
        let farm = load("1\n##start\ns -4 0\n##end\ne 0 -4\ns-e").unwrap();
        assert_eq!(farm.graph.coord(farm.graph.start), Some(Coord::new(-4, 0)));
    }

    #[test]
    fn large_coordinates() {
        let farm = load("1\n##start\ns 5000 0\n##end\ne -7 123456789\ns-e").unwrap();
        assert_eq!(farm.graph.coord(farm.graph.start), Some(Coord::new(5000, 0)));
        assert_eq!(farm.graph.coord(farm.graph.end), Some(Coord::new(-7, 123_456_789)));
    }

    #[test]
    fn disconnected_farm_still_loads() {
        let farm = load("1\n##start\ns 0 0\na 1 1\n##end\ne 2 2\ns-a").unwrap();
        assert_eq!(farm.graph.degree(farm.graph.end), 0);
    }

    #[test]
    fn from_reader() {
        let farm = load_farm_reader(Cursor::new(SAMPLE.as_bytes())).unwrap();
        assert_eq!(farm.graph.node_count(), 4);
    }

    #[test]
    fn from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let farm = load_farm_file(file.path()).unwrap();
        assert_eq!(farm.agent_count, 3);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let e = load_farm_file(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(e, LoadError::Io(_)));
    }
}

// ── Rejections ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rejections {
    use af_core::Coord;

    use super::*;
    use crate::Marker;

    #[test]
    fn empty() {
        assert!(matches!(err(""), LoadError::Empty));
        assert!(matches!(err("\n  \n"), LoadError::Empty));
        assert!(matches!(err("# only a comment\n"), LoadError::Empty));
    }

    #[test]
    fn bad_agent_count() {
        for bad in ["0", "-3", "many", "1.5"] {
            let text = format!("{bad}\n##start\ns 0 0\n##end\ne 1 1\ns-e");
            match err(&text) {
                LoadError::InvalidAgentCount { line, value } => {
                    assert_eq!(line, 1);
                    assert_eq!(value, bad);
                }
                e => panic!("unexpected {e}"),
            }
        }
    }

    #[test]
    fn agent_count_line_after_comment() {
        assert!(matches!(
            err("# header\n0\n"),
            LoadError::InvalidAgentCount { line: 2, .. }
        ));
    }

    #[test]
    fn marker_in_place_of_agent_count() {
        assert!(matches!(
            err("##start\ns 0 0\n"),
            LoadError::InvalidAgentCount { line: 1, .. }
        ));
    }

    #[test]
    fn missing_markers() {
        assert!(matches!(err("1\ns 0 0\n##end\ne 1 1\ns-e"), LoadError::MissingStart));
        assert!(matches!(err("1\n##start\ns 0 0\ne 1 1\ns-e"), LoadError::MissingEnd));
    }

    #[test]
    fn duplicate_marker() {
        assert!(matches!(
            err("1\n##start\ns 0 0\n##start\nt 1 1\n##end\ne 2 2"),
            LoadError::DuplicateMarker { line: 4, marker: Marker::Start }
        ));
    }

    #[test]
    fn dangling_marker() {
        // Marker followed by another marker.
        assert!(matches!(
            err("1\n##start\n##end\ne 1 1"),
            LoadError::DanglingMarker { line: 2, marker: Marker::Start }
        ));
        // Marker followed by a tunnel.
        assert!(matches!(
            err("1\n##start\ns 0 0\ne 1 1\n##end\ns-e"),
            LoadError::DanglingMarker { line: 5, marker: Marker::End }
        ));
        // Marker on the last line.
        assert!(matches!(
            err("1\n##start\ns 0 0\ne 1 1\n##end"),
            LoadError::DanglingMarker { line: 5, marker: Marker::End }
        ));
    }

    #[test]
    fn malformed_rooms() {
        for (room, why) in [
            ("s 0", "two tokens"),
            ("s 0 0 0", "four tokens"),
            ("Lroom 0 0", "leading L"),
            ("s 0 y", "non-integer coordinate"),
            ("s 0.5 0", "fractional coordinate"),
        ] {
            let text = format!("1\n##start\n{room}\n##end\ne 9 9");
            assert!(
                matches!(err(&text), LoadError::Malformed { line: 3, .. }),
                "{why}: {room:?} accepted"
            );
        }
    }

    #[test]
    fn room_after_tunnel() {
        assert!(matches!(
            err("1\n##start\ns 0 0\n##end\ne 1 1\ns-e\na 2 2"),
            LoadError::Malformed { line: 7, .. }
        ));
    }

    #[test]
    fn malformed_tunnels() {
        for tunnel in ["s-", "-e", "s-a-e"] {
            let text = format!("1\n##start\ns 0 0\na 1 1\n##end\ne 2 2\n{tunnel}");
            assert!(
                matches!(err(&text), LoadError::Malformed { line: 7, .. }),
                "{tunnel:?} accepted"
            );
        }
    }

    #[test]
    fn duplicate_room() {
        match err("1\n##start\ns 0 0\ns 1 1\n##end\ne 2 2") {
            LoadError::DuplicateRoom { line, name } => {
                assert_eq!(line, 4);
                assert_eq!(name, "s");
            }
            e => panic!("unexpected {e}"),
        }
    }

    #[test]
    fn duplicate_coordinates() {
        match err("1\n##start\ns 3 4\na 3 4\n##end\ne 2 2") {
            LoadError::DuplicateCoordinates { line, first, second, coord } => {
                assert_eq!(line, 4);
                assert_eq!((first.as_str(), second.as_str()), ("s", "a"));
                assert_eq!(coord, Coord::new(3, 4));
            }
            e => panic!("unexpected {e}"),
        }
    }

    #[test]
    fn unknown_room() {
        match err("1\n##start\ns 0 0\n##end\ne 1 1\ns-x") {
            LoadError::UnknownRoom { line, name } => {
                assert_eq!(line, 6);
                assert_eq!(name, "x");
            }
            e => panic!("unexpected {e}"),
        }
    }

    #[test]
    fn self_tunnel() {
        assert!(matches!(
            err("1\n##start\ns 0 0\n##end\ne 1 1\ns-s"),
            LoadError::SelfLoop { line: 6, .. }
        ));
    }

    #[test]
    fn duplicate_tunnel_either_orientation() {
        assert!(matches!(
            err("1\n##start\ns 0 0\n##end\ne 1 1\ns-e\ne-s"),
            LoadError::DuplicateTunnel { line: 7, .. }
        ));
    }

    #[test]
    fn not_enough_rooms() {
        assert!(matches!(err("1\n##start\ns 0 0\n"), LoadError::NotEnoughRooms(1)));
        assert!(matches!(err("1\n"), LoadError::NotEnoughRooms(0)));
    }

    #[test]
    fn messages_name_the_line() {
        let e = err("1\n##start\ns 0 0\n##end\ne 1 1\ns-x");
        assert_eq!(e.to_string(), "line 6: tunnel to unknown room \"x\"");
        assert_eq!(LoadError::MissingStart.to_string(), "no ##start room");
    }
}

// ── Presenters ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod presenters {
    use af_core::SolverConfig;
    use af_solve::{Solution, Solver};

    use super::*;
    use crate::{CsvPresenter, TextPresenter, TracePresenter, present};

    fn solved() -> (Farm, Solution) {
        let farm = load(SAMPLE).unwrap();
        let sol = Solver::new(&farm.graph, SolverConfig::default())
            .solve(farm.agent_count)
            .unwrap();
        (farm, sol)
    }

    #[test]
    fn text_lines() {
        let (farm, sol) = solved();
        let mut p = TextPresenter::new(Vec::new());
        present(&mut p, &farm.graph, &sol.schedule).unwrap();
        let out = String::from_utf8(p.into_inner()).unwrap();
        assert_eq!(out, "L1-a L2-b\nL1-e L2-e L3-a\nL3-e\n");
    }

    #[test]
    fn csv_rows() {
        let (farm, sol) = solved();
        let mut p = CsvPresenter::new(Vec::new()).unwrap();
        present(&mut p, &farm.graph, &sol.schedule).unwrap();
        let out = String::from_utf8(p.into_inner().unwrap()).unwrap();
        assert_eq!(
            out,
            "turn,ant,room\n1,1,a\n1,2,b\n2,1,e\n2,2,e\n2,3,a\n3,3,e\n"
        );
    }

    #[test]
    fn finish_is_idempotent() {
        let (farm, sol) = solved();
        let mut p = TextPresenter::new(Vec::new());
        present(&mut p, &farm.graph, &sol.schedule).unwrap();
        p.finish().unwrap();
        p.finish().unwrap();

        let mut c = CsvPresenter::new(Vec::new()).unwrap();
        c.finish().unwrap();
        c.finish().unwrap();
        let out = String::from_utf8(c.into_inner().unwrap()).unwrap();
        assert_eq!(out, "turn,ant,room\n");
    }
}
