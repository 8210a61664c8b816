#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use test_case::test_case;

    use panel_nest::entities::{Bin, PackedRect};
    use panel_nest::geometry::geo_enums::GeoRelation;
    use panel_nest::geometry::primitives::Rect;
    use panel_nest::packing::packer::{best_area_fit, prune_free_rects, split_free_rects};
    use panel_nest::util::assertions;
    use panel_nest::util::{PackerConfig, TieBreak};

    fn rect(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Rect {
        Rect::try_new(x_min, y_min, x_max, y_max).unwrap()
    }

    fn no_rotation() -> PackerConfig {
        PackerConfig {
            allow_rotation: false,
            ..PackerConfig::default()
        }
    }

    #[test]
    fn first_box_goes_to_the_origin() {
        let mut bin = Bin::new(0, 2800.0, 2000.0).unwrap();
        let packed = bin.place(0, 500.0, 300.0, &PackerConfig::default()).unwrap();

        assert_eq!((packed.x, packed.y), (0.0, 0.0));
        assert_eq!((packed.width, packed.height), (500.0, 300.0));
        assert!(!packed.rotated);
        assert_eq!(
            bin.free_rects(),
            &[rect(500.0, 0.0, 2800.0, 2000.0), rect(0.0, 300.0, 2800.0, 2000.0)]
        );
        assert!(assertions::bin_is_valid(&bin));
    }

    #[test]
    fn smallest_leftover_area_wins() {
        let free_rects = [
            rect(0.0, 0.0, 1000.0, 1000.0),
            rect(2000.0, 0.0, 2300.0, 400.0),
            rect(0.0, 1000.0, 600.0, 1500.0),
        ];
        let fit = best_area_fit(&free_rects, 250.0, 350.0, &no_rotation()).unwrap();
        assert_eq!(fit.free_rect_idx, 1);
        assert!(!fit.rotated);
    }

    #[test]
    fn rotation_is_used_when_only_that_fits() {
        let free_rects = [rect(0.0, 0.0, 1000.0, 200.0)];
        assert!(best_area_fit(&free_rects, 100.0, 900.0, &no_rotation()).is_none());

        let fit = best_area_fit(&free_rects, 100.0, 900.0, &PackerConfig::default()).unwrap();
        assert!(fit.rotated);
        assert_eq!((fit.width, fit.height), (900.0, 100.0));
    }

    #[test]
    fn unrotated_orientation_wins_a_full_tie() {
        let free_rects = [rect(0.0, 0.0, 1000.0, 1000.0)];
        let fit = best_area_fit(&free_rects, 400.0, 200.0, &PackerConfig::default()).unwrap();
        assert!(!fit.rotated);
        assert_eq!((fit.width, fit.height), (400.0, 200.0));
    }

    #[test]
    fn exact_fit_is_accepted() {
        let mut bin = Bin::new(0, 1000.0, 500.0).unwrap();
        let packed = bin.place(0, 1000.0, 500.0, &no_rotation()).unwrap();
        assert_eq!((packed.x, packed.y), (0.0, 0.0));
        assert!(bin.free_rects().is_empty());
        assert!(bin.place(1, 1.0, 1.0, &no_rotation()).is_none());
    }

    #[test_case(TieBreak::BottomLeft, 0; "bottom left")]
    #[test_case(TieBreak::ShortSideFit, 1; "short side fit")]
    fn equal_leftover_areas_are_broken_by_tie_break(tie_break: TieBreak, expected_idx: usize) {
        //both leave 4400 unused, with short side leftovers of 20 and 0
        let free_rects = [rect(0.0, 0.0, 120.0, 120.0), rect(0.0, 200.0, 144.0, 300.0)];
        let config = PackerConfig {
            allow_rotation: false,
            tie_break,
            ..PackerConfig::default()
        };
        let fit = best_area_fit(&free_rects, 100.0, 100.0, &config).unwrap();
        assert_eq!(fit.free_rect_idx, expected_idx);
    }

    #[test]
    fn bottom_left_prefers_lowest_then_leftmost() {
        let free_rects = [
            rect(500.0, 100.0, 600.0, 200.0),
            rect(300.0, 0.0, 400.0, 100.0),
            rect(100.0, 0.0, 200.0, 100.0),
        ];
        let fit = best_area_fit(&free_rects, 50.0, 50.0, &no_rotation()).unwrap();
        assert_eq!(fit.free_rect_idx, 2);
    }

    #[test]
    fn failed_placement_leaves_bin_untouched() {
        let mut bin = Bin::new(0, 1000.0, 1000.0).unwrap();
        bin.place(0, 600.0, 600.0, &PackerConfig::default()).unwrap();
        let free_rects = bin.free_rects().to_vec();
        let placements = bin.placements().to_vec();

        assert!(bin.place(1, 600.0, 600.0, &PackerConfig::default()).is_none());
        assert_eq!(bin.free_rects(), free_rects.as_slice());
        assert_eq!(bin.placements(), placements.as_slice());
    }

    #[test]
    fn split_produces_maximal_strips_around_the_box() {
        let mut free_rects = vec![rect(0.0, 0.0, 100.0, 100.0)];
        split_free_rects(&mut free_rects, rect(40.0, 30.0, 60.0, 70.0));
        assert_eq!(
            free_rects,
            vec![
                rect(60.0, 0.0, 100.0, 100.0),
                rect(0.0, 70.0, 100.0, 100.0),
                rect(0.0, 0.0, 40.0, 100.0),
                rect(0.0, 0.0, 100.0, 30.0),
            ]
        );
    }

    #[test]
    fn split_keeps_disjoint_rects_in_front() {
        let disjoint = rect(200.0, 0.0, 300.0, 100.0);
        let mut free_rects = vec![rect(0.0, 0.0, 100.0, 100.0), disjoint];
        split_free_rects(&mut free_rects, rect(0.0, 0.0, 50.0, 50.0));
        assert_eq!(free_rects[0], disjoint);
        assert_eq!(free_rects.len(), 3);
    }

    #[test]
    fn prune_removes_contained_and_duplicate_rects() {
        let mut free_rects = vec![
            rect(0.0, 0.0, 50.0, 50.0),
            rect(0.0, 0.0, 100.0, 100.0),
            rect(200.0, 0.0, 300.0, 100.0),
            rect(0.0, 0.0, 100.0, 100.0),
            rect(10.0, 10.0, 20.0, 20.0),
        ];
        prune_free_rects(&mut free_rects);
        assert_eq!(
            free_rects,
            vec![rect(0.0, 0.0, 100.0, 100.0), rect(200.0, 0.0, 300.0, 100.0)]
        );
    }

    #[test_case(true; "with rotation")]
    #[test_case(false; "without rotation")]
    fn free_rects_stay_valid_while_filling(allow_rotation: bool) {
        let config = PackerConfig {
            allow_rotation,
            ..PackerConfig::default()
        };
        let mut bin = Bin::new(0, 2800.0, 2070.0).unwrap();
        let sizes = [
            (500.0, 300.0),
            (1200.0, 900.0),
            (300.0, 700.0),
            (450.0, 450.0),
            (100.0, 1500.0),
            (800.0, 120.0),
            (640.0, 480.0),
            (330.0, 330.0),
            (75.5, 210.25),
            (999.0, 101.0),
        ];
        for (id, &(w, h)) in sizes.iter().cycle().take(40).enumerate() {
            let before = bin.placements().len();
            match bin.place(id, w, h, &config) {
                Some(packed) => {
                    assert_eq!(bin.placements().len(), before + 1);
                    assertions::placement_is_valid(&bin, id, &packed).unwrap();
                }
                None => assert_eq!(bin.placements().len(), before),
            }
            assert!(assertions::bin_is_valid(&bin));
            assert!(
                bin.free_rects()
                    .iter()
                    .tuple_combinations()
                    .all(|(a, b)| a.relation_to(*b) != GeoRelation::Surrounding
                        && b.relation_to(*a) != GeoRelation::Surrounding)
            );
        }
        assert!(bin.density() > 0.0 && bin.density() <= 1.0);
    }

    fn packed(bin_index: usize, x: f64, y: f64, width: f64, height: f64) -> PackedRect {
        PackedRect {
            bin_index,
            x,
            y,
            width,
            height,
            rotated: false,
        }
    }

    #[test]
    fn overlapping_placement_is_an_error() {
        let mut bin = Bin::new(3, 2800.0, 2000.0).unwrap();
        bin.place(0, 500.0, 300.0, &PackerConfig::default()).unwrap();

        let err = assertions::placement_is_valid(&bin, 1, &packed(3, 100.0, 100.0, 500.0, 300.0))
            .unwrap_err()
            .to_string();
        assert!(err.contains("shape 1"), "{err}");
        assert!(err.contains("bin 3"), "{err}");
        assert!(err.contains("overlaps shape 0"), "{err}");
        assert!(err.contains("x_min: 100.0, y_min: 100.0, x_max: 600.0, y_max: 400.0"), "{err}");
    }

    #[test_case(2500.0, 0.0; "past the right edge")]
    #[test_case(0.0, -1.0; "below the panel")]
    fn placement_outside_the_panel_is_an_error(x: f64, y: f64) {
        let bin = Bin::new(2, 2800.0, 2000.0).unwrap();

        let err = assertions::placement_is_valid(&bin, 7, &packed(2, x, y, 500.0, 300.0))
            .unwrap_err()
            .to_string();
        assert!(err.contains("shape 7"), "{err}");
        assert!(err.contains("outside of bin 2"), "{err}");
        assert!(err.contains(&format!("x_min: {x:?}, y_min: {y:?}")), "{err}");
    }

    #[test]
    fn placement_in_another_bin_is_an_error() {
        let bin = Bin::new(0, 2800.0, 2000.0).unwrap();
        assert!(assertions::placement_is_valid(&bin, 0, &packed(1, 0.0, 0.0, 10.0, 10.0)).is_err());
    }

    #[test]
    fn touching_placements_are_valid() {
        let mut bin = Bin::new(0, 1000.0, 1000.0).unwrap();
        bin.place(0, 500.0, 300.0, &PackerConfig::default()).unwrap();
        assert!(assertions::placement_is_valid(&bin, 1, &packed(0, 500.0, 0.0, 500.0, 300.0)).is_ok());
        assert!(assertions::placement_is_valid(&bin, 1, &packed(0, 0.0, 300.0, 500.0, 300.0)).is_ok());
    }
}
