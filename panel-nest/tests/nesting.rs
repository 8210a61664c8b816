#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use test_case::test_case;

    use panel_nest::entities::{NestInstance, RejectionReason, ShapeKind, ShapeRecord};
    use panel_nest::geometry::primitives::{Circle, Edge, Point, Polyline};
    use panel_nest::packing::{Insertion, NestProblem, pack_all, resolve_transform};
    use panel_nest::util::assertions;
    use panel_nest::util::{BinSelection, PackerConfig, TieBreak};

    const PANEL: (f64, f64) = (2800.0, 2000.0);

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Closed polyline outlining a `w` x `h` rectangle with its lower-left corner at `(x, y)`
    fn rect_shape(id: usize, x: f64, y: f64, w: f64, h: f64) -> ShapeRecord {
        let outline = Polyline::try_new(
            vec![
                Point(x, y),
                Point(x + w, y),
                Point(x + w, y + h),
                Point(x, y + h),
            ],
            true,
        )
        .unwrap();
        ShapeRecord::new(id, ShapeKind::Polyline(outline)).unwrap()
    }

    fn no_rotation() -> PackerConfig {
        PackerConfig {
            allow_rotation: false,
            ..PackerConfig::default()
        }
    }

    #[test]
    fn small_and_large_shapes_share_a_panel() {
        init_logger();
        let shapes = vec![
            rect_shape(0, 0.0, 0.0, 500.0, 300.0),
            rect_shape(1, 0.0, 0.0, 1200.0, 900.0),
            rect_shape(2, 10.0, 20.0, 300.0, 2500.0),
        ];
        let sol = pack_all(&shapes, PANEL.0, PANEL.1, PackerConfig::default()).unwrap();

        assert_eq!(sol.n_bins(), 1);
        assert_eq!(sol.n_placed(), 3);
        assert!(sol.rejections.is_empty());

        let a = sol.placements[&0];
        let b = sol.placements[&1];
        let c = sol.placements[&2];
        assert_eq!((a.x, a.y, a.rotated), (0.0, 0.0, false));
        assert_eq!((b.x, b.y, b.rotated), (500.0, 0.0, false));
        //too tall for the panel, only fits lying down
        assert_eq!((c.x, c.y, c.rotated), (0.0, 900.0, true));
        assert_eq!((c.width, c.height), (2500.0, 300.0));
        assert!(assertions::solution_is_valid(&sol));
    }

    #[test]
    fn large_shape_opens_a_second_panel() {
        init_logger();
        let shapes = vec![
            rect_shape(0, 0.0, 0.0, 500.0, 300.0),
            rect_shape(1, 0.0, 0.0, 1200.0, 900.0),
            rect_shape(2, 0.0, 0.0, 300.0, 2500.0),
            rect_shape(3, 0.0, 0.0, 2700.0, 1900.0),
        ];
        let sol = pack_all(&shapes, PANEL.0, PANEL.1, PackerConfig::default()).unwrap();

        assert_eq!(sol.n_bins(), 2);
        let d = sol.placements[&3];
        assert_eq!((d.bin_index, d.x, d.y, d.rotated), (1, 0.0, 0.0, false));
        assert!(sol.placements.values().take(3).all(|pr| pr.bin_index == 0));
        assert_eq!(sol.bins[1].placements().len(), 1);
        assert!(assertions::solution_is_valid(&sol));
    }

    #[test]
    fn tall_shape_is_oversized_without_rotation() {
        init_logger();
        let shapes = vec![
            rect_shape(0, 0.0, 0.0, 500.0, 300.0),
            rect_shape(1, 0.0, 0.0, 300.0, 2500.0),
        ];
        let sol = pack_all(&shapes, PANEL.0, PANEL.1, no_rotation()).unwrap();

        assert_eq!(sol.n_placed(), 1);
        assert_eq!(sol.rejections.len(), 1);
        assert_eq!(sol.rejections[0].shape_id, 1);
        assert_eq!(
            sol.rejections[0].reason,
            RejectionReason::Oversized {
                width: 300.0,
                height: 2500.0
            }
        );
    }

    #[test_case(3000.0, 100.0; "wider than any side")]
    #[test_case(2100.0, 2100.0; "square too large")]
    fn oversized_shapes_are_rejected(w: f64, h: f64) {
        init_logger();
        let sol = pack_all(
            &[rect_shape(0, 0.0, 0.0, w, h)],
            PANEL.0,
            PANEL.1,
            PackerConfig::default(),
        )
        .unwrap();
        assert_eq!(sol.n_bins(), 0);
        assert!(matches!(
            sol.rejections[0].reason,
            RejectionReason::Oversized { .. }
        ));
    }

    #[test]
    fn degenerate_shapes_are_rejected_without_opening_a_bin() {
        init_logger();
        let horizontal = Edge::try_new(Point(0.0, 5.0), Point(100.0, 5.0)).unwrap();
        let point = Circle::try_new(Point(50.0, 50.0), 0.0).unwrap();
        let shapes = vec![
            ShapeRecord::new(0, ShapeKind::Segment(horizontal)).unwrap(),
            ShapeRecord::new(1, ShapeKind::Circle(point)).unwrap(),
        ];

        let sol = pack_all(&shapes, PANEL.0, PANEL.1, PackerConfig::default()).unwrap();
        assert_eq!(sol.n_bins(), 0);
        assert_eq!(sol.n_placed(), 0);
        assert_eq!(
            sol.rejections.iter().map(|r| r.shape_id).collect_vec(),
            vec![0, 1]
        );
        assert_eq!(
            sol.rejections[0].reason,
            RejectionReason::Degenerate {
                width: 100.0,
                height: 0.0
            }
        );
        assert_eq!(sol.density(), 0.0);
    }

    #[test]
    fn rejection_does_not_disturb_the_other_shapes() {
        init_logger();
        let shapes = vec![
            rect_shape(0, 0.0, 0.0, 500.0, 300.0),
            rect_shape(1, 0.0, 0.0, 5000.0, 300.0),
            rect_shape(2, 0.0, 0.0, 1200.0, 900.0),
        ];
        let sol = pack_all(&shapes, PANEL.0, PANEL.1, PackerConfig::default()).unwrap();
        assert_eq!(sol.n_placed(), 2);
        assert_eq!(sol.rejections.len(), 1);
        assert_eq!((sol.placements[&2].x, sol.placements[&2].y), (500.0, 0.0));
    }

    #[test]
    fn empty_input_opens_no_bins() {
        let sol = pack_all(&[], PANEL.0, PANEL.1, PackerConfig::default()).unwrap();
        assert_eq!(sol.n_bins(), 0);
        assert!(sol.placements.is_empty());
        assert!(sol.rejections.is_empty());
    }

    #[test_case(0.0, 2000.0; "zero width")]
    #[test_case(2800.0, -1.0; "negative height")]
    #[test_case(f64::NAN, 2000.0; "nan width")]
    #[test_case(2800.0, f64::INFINITY; "infinite height")]
    fn invalid_panels_are_refused(w: f64, h: f64) {
        assert!(NestProblem::new(w, h, PackerConfig::default()).is_err());
        assert!(pack_all(&[rect_shape(0, 0.0, 0.0, 10.0, 10.0)], w, h, PackerConfig::default()).is_err());
    }

    #[test]
    fn duplicate_ids_are_refused() {
        let shapes = vec![
            rect_shape(0, 0.0, 0.0, 10.0, 10.0),
            rect_shape(0, 0.0, 0.0, 20.0, 20.0),
        ];
        assert!(pack_all(&shapes, PANEL.0, PANEL.1, PackerConfig::default()).is_err());

        let mut problem = NestProblem::new(PANEL.0, PANEL.1, PackerConfig::default()).unwrap();
        assert!(problem.insert(&shapes[0]).is_ok());
        assert!(problem.insert(&shapes[1]).is_err());
    }

    #[test]
    fn insert_reports_the_outcome() {
        let mut problem = NestProblem::new(1000.0, 1000.0, PackerConfig::default()).unwrap();
        match problem.insert(&rect_shape(0, 0.0, 0.0, 400.0, 600.0)).unwrap() {
            Insertion::Placed(pr) => assert_eq!((pr.bin_index, pr.x, pr.y), (0, 0.0, 0.0)),
            Insertion::Rejected(reason) => panic!("unexpected rejection: {reason}"),
        }
        assert!(matches!(
            problem.insert(&rect_shape(1, 0.0, 0.0, 1001.0, 1001.0)).unwrap(),
            Insertion::Rejected(RejectionReason::Oversized { .. })
        ));
        let sol = problem.save();
        assert_eq!(sol.n_placed(), 1);
        assert_eq!(sol.rejections.len(), 1);
    }

    #[test_case(BinSelection::NewestFirst, 1; "newest first")]
    #[test_case(BinSelection::FirstFit, 0; "first fit")]
    fn bin_selection_decides_where_small_shapes_go(bin_selection: BinSelection, expected_bin: usize) {
        init_logger();
        let config = PackerConfig {
            bin_selection,
            ..no_rotation()
        };
        let shapes = vec![
            //leaves room in bin 0
            rect_shape(0, 0.0, 0.0, 600.0, 1000.0),
            //does not fit next to it, opens bin 1 with room left as well
            rect_shape(1, 0.0, 0.0, 600.0, 1000.0),
            rect_shape(2, 0.0, 0.0, 100.0, 100.0),
        ];
        let sol = pack_all(&shapes, 1000.0, 1000.0, config).unwrap();
        assert_eq!(sol.n_bins(), 2);
        assert_eq!(sol.placements[&2].bin_index, expected_bin);
    }

    #[test]
    fn bin_selection_order() {
        assert_eq!(BinSelection::NewestFirst.order(0).collect_vec(), Vec::<usize>::new());
        assert_eq!(BinSelection::NewestFirst.order(1).collect_vec(), vec![0]);
        assert_eq!(BinSelection::NewestFirst.order(4).collect_vec(), vec![3, 0, 1, 2]);
        assert_eq!(BinSelection::FirstFit.order(3).collect_vec(), vec![0, 1, 2]);
    }

    fn mixed_shapes() -> Vec<ShapeRecord> {
        let sizes = [
            (500.0, 300.0),
            (1200.0, 900.0),
            (300.0, 1500.0),
            (2700.0, 1900.0),
            (640.0, 480.0),
            (100.0, 100.0),
            (1900.0, 250.0),
            (35.5, 1000.25),
            (800.0, 800.0),
            (450.0, 1250.0),
        ];
        sizes
            .iter()
            .cycle()
            .take(60)
            .enumerate()
            .map(|(id, &(w, h))| rect_shape(id, -(id as f64) * 7.0, id as f64 * 3.0, w, h))
            .collect()
    }

    #[test_case(PackerConfig::default(); "default")]
    #[test_case(no_rotation(); "no rotation")]
    #[test_case(PackerConfig { tie_break: TieBreak::ShortSideFit, ..PackerConfig::default() }; "short side fit")]
    #[test_case(PackerConfig { bin_selection: BinSelection::FirstFit, ..PackerConfig::default() }; "first fit")]
    fn every_layout_is_valid(config: PackerConfig) {
        init_logger();
        let shapes = mixed_shapes();
        let sol = pack_all(&shapes, PANEL.0, PANEL.1, config).unwrap();

        assert!(assertions::solution_is_valid(&sol));
        //every shape is either placed or rejected, exactly once
        assert_eq!(sol.n_placed() + sol.rejections.len(), shapes.len());
        for shape in &shapes {
            if let Some(packed) = sol.placements.get(&shape.id()) {
                assert!(assertions::dimensions_preserved(shape, packed));
                let dt = resolve_transform(shape, packed);
                assert!(assertions::transformation_matches(shape, packed, &dt));
                if !config.allow_rotation {
                    assert!(!packed.rotated);
                }
            }
        }
        //no bin is left empty
        assert!(sol.bins.iter().all(|b| !b.is_empty()));
        assert!(sol.density() > 0.0 && sol.density() <= 1.0);
    }

    #[test]
    fn packing_is_deterministic() {
        let shapes = mixed_shapes();
        let first = pack_all(&shapes, PANEL.0, PANEL.1, PackerConfig::default()).unwrap();
        let second = pack_all(&shapes, PANEL.0, PANEL.1, PackerConfig::default()).unwrap();

        assert_eq!(first.placements, second.placements);
        assert_eq!(first.rejections, second.rejections);
        assert_eq!(
            first.bins.iter().map(|b| b.free_rects().to_vec()).collect_vec(),
            second.bins.iter().map(|b| b.free_rects().to_vec()).collect_vec()
        );
    }

    #[test]
    fn instance_solves_its_shapes() {
        let instance = NestInstance::new(
            "instance".to_string(),
            PANEL.0,
            PANEL.1,
            mixed_shapes(),
        )
        .unwrap();
        let sol = instance.solve(PackerConfig::default()).unwrap();
        assert_eq!(sol.n_placed(), instance.shapes().len());
        assert!(sol.density() * sol.n_bins() as f64 * PANEL.0 * PANEL.1 <= instance.total_shape_area() + 1e-6);
    }

    #[test]
    fn instance_requires_dense_ids() {
        let shapes = vec![rect_shape(0, 0.0, 0.0, 1.0, 1.0), rect_shape(2, 0.0, 0.0, 1.0, 1.0)];
        assert!(NestInstance::new("gap".to_string(), PANEL.0, PANEL.1, shapes).is_err());
    }

    #[test_case(BinSelection::NewestFirst, [0, 1, 2, 2, 2, 0]; "newest first")]
    #[test_case(BinSelection::FirstFit, [0, 1, 2, 0, 0, 1]; "first fit")]
    fn insert_moves_through_several_bins(bin_selection: BinSelection, expected_bins: [usize; 6]) {
        let config = PackerConfig {
            bin_selection,
            ..no_rotation()
        };
        let mut problem = NestProblem::new(1000.0, 1000.0, config).unwrap();
        let shapes = [
            rect_shape(0, 0.0, 0.0, 700.0, 1000.0),
            rect_shape(1, 0.0, 0.0, 700.0, 1000.0),
            rect_shape(2, 0.0, 0.0, 700.0, 1000.0),
            //two of these fit next to each of the shapes above
            rect_shape(3, 0.0, 0.0, 300.0, 500.0),
            rect_shape(4, 0.0, 0.0, 300.0, 500.0),
            rect_shape(5, 0.0, 0.0, 300.0, 500.0),
        ];
        let bins = shapes
            .iter()
            .map(|shape| match problem.insert(shape).unwrap() {
                Insertion::Placed(pr) => pr.bin_index,
                Insertion::Rejected(reason) => panic!("unexpected rejection: {reason}"),
            })
            .collect_vec();

        assert_eq!(bins, expected_bins);
        assert_eq!(problem.bins.len(), 3);
        assert!(assertions::solution_is_valid(&problem.save()));
    }

    #[test]
    fn rejected_ids_count_as_seen() {
        let mut problem = NestProblem::new(PANEL.0, PANEL.1, PackerConfig::default()).unwrap();
        let oversized = rect_shape(0, 0.0, 0.0, 5000.0, 5000.0);
        assert!(matches!(
            problem.insert(&oversized).unwrap(),
            Insertion::Rejected(_)
        ));
        assert!(problem.insert(&rect_shape(0, 0.0, 0.0, 10.0, 10.0)).is_err());
        assert!(problem.insert(&rect_shape(1, 0.0, 0.0, 10.0, 10.0)).is_ok());
    }

    #[test]
    fn geometry_without_a_finite_bbox_is_refused() {
        assert!(Polyline::try_new(vec![], false).is_err());
        assert!(Polyline::try_new(vec![Point(0.0, f64::NAN)], true).is_err());
        assert!(Circle::try_new(Point(f64::INFINITY, 0.0), 1.0).is_err());
        assert!(Circle::try_new(Point(0.0, 0.0), -1.0).is_err());
        assert!(ShapeRecord::new(0, ShapeKind::Path(vec![])).is_err());

        //a path is as valid as its sub-paths
        let single = Polyline::try_new(vec![Point(1.0, 2.0)], false).unwrap();
        let record = ShapeRecord::new(0, ShapeKind::Path(vec![single])).unwrap();
        assert!(record.is_degenerate());
    }
}
