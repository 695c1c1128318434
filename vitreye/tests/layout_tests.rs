#[cfg(test)]
mod tests {
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    use vitreye::LayoutError;
    use vitreye::entities::{Footprint, Item, Layout, WindowSize};
    use vitreye::geometry::{Point, Rect};
    use vitreye::io::export::export_layout;
    use vitreye::io::ext_repr::ExtItem;
    use vitreye::io::import::{import_items, import_layout};
    use vitreye::io::svg::{SvgDrawOptions, layout_to_svg};
    use vitreye::scroll::ScrollState;
    use vitreye::util::{CapacityPolicy, LayoutConfig, assertions};

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    /// Both dimensions uniform in [100, 2048]
    fn random_items(n: usize, seed: u64) -> Vec<Item> {
        let mut rng = SmallRng::seed_from_u64(seed);
        (0..n)
            .map(|id| Item::new(id, rng.random_range(100..=2048), rng.random_range(100..=2048)))
            .collect()
    }

    fn squares(n: usize) -> Vec<Item> {
        (0..n).map(|id| Item::new(id, 100, 75)).collect()
    }

    #[test]
    fn reference_window_grid_params() {
        let (layout, report) =
            Layout::from_items(LayoutConfig::default(), [], WindowSize::new(800, 600));
        let params = layout.grid_params();
        assert_eq!(params.n_cols, 4);
        assert_eq!(params.n_rows, 4);
        assert_eq!(params.margin_x, 0);
        assert_eq!(params.margin_y, 10);
        assert!(!report.degenerate);
        assert!(layout.is_empty());
    }

    #[test]
    fn first_wide_item_at_origin() {
        init_logger();
        let (layout, report) = Layout::from_items(
            LayoutConfig::default(),
            [Item::new(0, 2048, 100)],
            WindowSize::new(800, 600),
        );
        assert_eq!(report.n_placed, 1);
        let tile = layout.tile(0).unwrap();
        assert_eq!(tile.footprint, Footprint::Wide);
        assert_eq!(tile.cell, 0);
        assert_eq!(tile.outer, Rect::new(0, 5, 400, 150));
        assert!(tile.outer.contains(&tile.inner));
    }

    #[test_case(2048, 100, 4 => Footprint::Wide; "very wide")]
    #[test_case(100, 100, 4 => Footprint::Square; "square")]
    #[test_case(100, 2048, 4 => Footprint::Tall; "very tall")]
    #[test_case(400, 300, 4 => Footprint::Square; "cell aspect")]
    #[test_case(20, 7, 4 => Footprint::Square; "diff exactly 0.4")]
    #[test_case(20, 23, 4 => Footprint::Square; "diff exactly minus 0.4")]
    #[test_case(21, 7, 4 => Footprint::Wide; "diff just above 0.4")]
    #[test_case(20, 24, 4 => Footprint::Tall; "diff just below minus 0.4")]
    #[test_case(2048, 100, 1 => Footprint::Square; "wide on single column")]
    #[test_case(2048, 100, 0 => Footprint::Square; "wide on degenerate grid")]
    #[test_case(100, 2048, 1 => Footprint::Tall; "tall on single column")]
    fn classify(width: u32, height: u32, n_cols: usize) -> Footprint {
        let item = Item::new(0, width, height);
        Footprint::classify(&item, &LayoutConfig::default(), n_cols)
    }

    #[test]
    fn fragmentation_overflows_with_free_cells_left() {
        init_logger();
        let config = LayoutConfig {
            capacity: CapacityPolicy::Fixed { n_rows: 2 },
            ..LayoutConfig::default()
        };
        let wide = (0..3).map(|id| Item::new(id, 2048, 100));
        let (layout, report) = Layout::from_items(config, wide, WindowSize::new(600, 300));

        assert_eq!(layout.grid_params().n_cols, 3);
        assert_eq!(layout.tile(0).unwrap().cell, 0);
        assert_eq!(layout.tile(1).unwrap().cell, 3);
        assert_eq!(report.n_placed, 2);
        assert_eq!(report.overflowed, vec![2]);
        assert_eq!(layout.n_overflows(), 1);
        // two single cells remain, neither can hold a wide footprint
        assert_eq!(layout.occupancy().n_free_cells(), 2);
        assert_eq!(layout.unplaced().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn overflow_does_not_stop_relayout() {
        let config = LayoutConfig {
            capacity: CapacityPolicy::Fixed { n_rows: 2 },
            ..LayoutConfig::default()
        };
        let items = [
            Item::new(0, 2048, 100),
            Item::new(1, 2048, 100),
            Item::new(2, 2048, 100),
            Item::new(3, 100, 75),
        ];
        let (layout, report) = Layout::from_items(config, items, WindowSize::new(600, 300));
        assert_eq!(report.overflowed, vec![2]);
        assert_eq!(report.n_placed, 3);
        assert_eq!(layout.tile(3).unwrap().cell, 2);
    }

    #[test]
    fn place_item_reports_overflow_and_keeps_item() {
        let config = LayoutConfig {
            capacity: CapacityPolicy::Fixed { n_rows: 1 },
            ..LayoutConfig::default()
        };
        let (mut layout, _) = Layout::from_items(config, [], WindowSize::new(400, 300));
        assert!(layout.place_item(Item::new(0, 2048, 100)).is_ok());
        let err = layout.place_item(Item::new(1, 100, 75)).unwrap_err();
        assert_eq!(
            err,
            LayoutError::PlacementOverflow {
                item_id: 1,
                footprint: Footprint::Square
            }
        );
        assert_eq!(layout.n_items(), 2);
        assert!(layout.tile(1).is_none());

        // a wider window has room for it
        let report = layout.relayout(WindowSize::new(600, 300));
        assert!(report.overflowed.is_empty());
        assert_eq!(layout.tile(1).unwrap().cell, 2);
    }

    #[test]
    fn degenerate_window_lays_out_nothing() {
        init_logger();
        let (mut layout, report) =
            Layout::from_items(LayoutConfig::default(), squares(3), WindowSize::new(150, 600));
        assert!(report.degenerate);
        assert_eq!(report.n_placed, 0);
        assert_eq!(layout.grid_params().margin_x, 0);
        assert!(layout.is_empty());
        assert_eq!(layout.content_height(), 0);

        let err = layout.place_item(Item::new(3, 10, 10)).unwrap_err();
        assert_eq!(
            err,
            LayoutError::DegenerateGrid {
                window_width: 150,
                tile_width: 200
            }
        );
        assert_eq!(layout.item_at(Point(10, 10), &ScrollState::default()), None);

        let report = layout.relayout(WindowSize::new(800, 600));
        assert_eq!(report.n_placed, 4);
    }

    #[test_case(800, 600; "reference window")]
    #[test_case(1920, 1080; "full hd")]
    #[test_case(950, 400; "uneven margins")]
    #[test_case(410, 300; "two columns")]
    #[test_case(200, 150; "single cell window")]
    #[test_case(333, 2000; "single column")]
    fn relayout_upholds_invariants(width: u32, height: u32) {
        init_logger();
        let items = random_items(256, 1);
        let (layout, report) =
            Layout::from_items(LayoutConfig::default(), items, WindowSize::new(width, height));

        assert!(!report.degenerate);
        assert_eq!(report.n_placed, 256, "growing capacity places every item");
        assert!(assertions::all_inner_rects_fit(&layout));
        assert!(assertions::no_overlapping_tiles(&layout));
        assert!(assertions::occupancy_matches_tiles(&layout));

        let n_cols = layout.grid_params().n_cols;
        for (_, tile) in layout.tiles() {
            if n_cols == 1 {
                assert_ne!(tile.footprint, Footprint::Wide);
            }
            let outer = tile.outer;
            assert!(outer.x >= 0 && outer.x_max() <= width as i32);
        }
    }

    #[test_case(800, 600, 11; "reference window")]
    #[test_case(1280, 720, 12; "wide window")]
    #[test_case(300, 900, 13; "single column")]
    fn place_item_never_disturbs_existing_tiles(width: u32, height: u32, seed: u64) {
        let items = random_items(128, seed);
        let (mut layout, _) =
            Layout::from_items(LayoutConfig::default(), [], WindowSize::new(width, height));

        for item in items {
            let before = layout.tiles().map(|(id, t)| (id, *t)).collect::<Vec<_>>();
            let tile = layout.place_item(item).unwrap();
            assert_eq!(layout.tile(item.id), Some(&tile));
            for (id, t) in before {
                assert_eq!(layout.tile(id), Some(&t));
            }
        }
        assert!(assertions::layout_is_consistent(&layout));
    }

    #[test]
    fn incremental_placement_matches_relayout() {
        let window = WindowSize::new(1000, 700);
        let items = random_items(200, 7);

        let (mut incremental, _) = Layout::from_items(LayoutConfig::default(), [], window);
        for item in items.iter() {
            incremental.place_item(*item).unwrap();
        }
        let (full, _) = Layout::from_items(LayoutConfig::default(), items, window);

        assert_eq!(export_layout(&incremental), export_layout(&full));
    }

    #[test]
    fn relayout_after_resize_is_deterministic() {
        let items = random_items(100, 3);
        let (mut layout, _) =
            Layout::from_items(LayoutConfig::default(), items.clone(), WindowSize::new(800, 600));
        let original = export_layout(&layout);

        layout.relayout(WindowSize::new(1600, 600));
        assert_ne!(export_layout(&layout).tiles, original.tiles);

        layout.relayout(WindowSize::new(800, 600));
        assert_eq!(export_layout(&layout).tiles, original.tiles);
    }

    #[test]
    fn fallback_item_is_laid_out_like_any_other() {
        let (layout, _) = Layout::from_items(
            LayoutConfig::default(),
            [Item::fallback(0)],
            WindowSize::new(800, 600),
        );
        let tile = layout.tile(0).unwrap();
        assert_eq!(tile.footprint, Footprint::Square);
        assert_eq!(tile.inner, Rect::new(25, 5, 150, 150));
    }

    #[test]
    fn scroll_offset_never_positive() {
        let mut scroll = ScrollState::new(30);
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..1000 {
            let ticks = rng.random_range(-5..=5);
            let flipped = rng.random_bool(0.5);
            assert!(scroll.apply_delta(ticks, flipped) <= 0);
        }
        assert_eq!(scroll.apply_delta(i32::MAX, false), 0);
        assert!(scroll.apply_delta(i32::MIN, false) <= 0);
    }

    #[test]
    fn scroll_direction() {
        let mut scroll = ScrollState::new(30);
        assert_eq!(scroll.apply_delta(-6, false), -180);
        assert_eq!(scroll.apply_delta(2, true), -240);
        assert_eq!(scroll.apply_delta(10, false), 0);
        assert_eq!(scroll.apply_delta(-1, true), 0);
        assert_eq!(scroll.to_screen(Rect::new(0, 5, 10, 10)), Rect::new(0, 5, 10, 10));
    }

    #[test]
    fn scroll_does_not_mutate_tiles() {
        let (layout, _) =
            Layout::from_items(LayoutConfig::default(), squares(8), WindowSize::new(800, 600));
        let before = export_layout(&layout);
        let mut scroll = ScrollState::default();
        scroll.apply_delta(-3, false);
        let _ = layout_to_svg(&layout, &scroll, SvgDrawOptions::default());
        assert_eq!(export_layout(&layout), before);
        assert_eq!(
            scroll.to_screen(layout.tile(4).unwrap().outer),
            Rect::new(0, 165 - 90, 200, 150)
        );
    }

    #[test]
    fn click_resolves_through_scroll_offset() {
        let (layout, _) =
            Layout::from_items(LayoutConfig::default(), squares(8), WindowSize::new(800, 600));
        let mut scroll = ScrollState::new(30);

        assert_eq!(layout.item_at(Point(10, 10), &scroll), Some(0));
        assert_eq!(layout.item_at(Point(610, 10), &scroll), Some(3));
        // top margin
        assert_eq!(layout.item_at(Point(10, 2), &scroll), None);

        scroll.apply_delta(-6, false);
        assert_eq!(layout.item_at(Point(10, 10), &scroll), Some(4));
        assert_eq!(layout.item_at(Point(10, 400), &scroll), None);
        assert_eq!(layout.item_at_cell(4), Some(4));
        assert_eq!(layout.item_at_cell(12), None);
    }

    #[test]
    fn click_in_horizontal_margin_resolves_to_nothing() {
        let (layout, _) =
            Layout::from_items(LayoutConfig::default(), squares(4), WindowSize::new(950, 600));
        let scroll = ScrollState::default();
        assert_eq!(layout.grid_params().margin_x, 37);
        assert_eq!(layout.item_at(Point(5, 50), &scroll), None);
        assert_eq!(layout.item_at(Point(20, 50), &scroll), Some(0));
        assert_eq!(layout.item_at(Point(240, 50), &scroll), None);
        assert_eq!(layout.item_at(Point(260, 50), &scroll), Some(1));
        assert_eq!(layout.item_at(Point(949, 50), &scroll), None);
    }

    #[test]
    fn click_on_wide_tile_second_cell() {
        let (layout, _) = Layout::from_items(
            LayoutConfig::default(),
            [Item::new(0, 2048, 100)],
            WindowSize::new(800, 600),
        );
        let scroll = ScrollState::default();
        assert_eq!(layout.item_at(Point(350, 50), &scroll), Some(0));
        assert_eq!(layout.item_at(Point(450, 50), &scroll), None);
    }

    #[test]
    fn content_height_covers_all_rows() {
        let (layout, _) =
            Layout::from_items(LayoutConfig::default(), squares(9), WindowSize::new(800, 600));
        assert_eq!(layout.content_height(), 3 * 160);
    }

    #[test]
    fn growing_capacity_places_everything() {
        let (layout, report) = Layout::from_items(
            LayoutConfig::default(),
            random_items(64, 1),
            WindowSize::new(800, 600),
        );
        assert_eq!(report.n_placed, 64);
        assert!(layout.occupancy().n_rows() > layout.grid_params().n_rows);
    }

    #[test]
    fn growing_capacity_respects_hard_cap() {
        let config = LayoutConfig {
            capacity: CapacityPolicy::Growing { max_rows: 2 },
            ..LayoutConfig::default()
        };
        let (layout, report) = Layout::from_items(config, squares(10), WindowSize::new(800, 150));
        assert_eq!(report.n_placed, 8);
        assert_eq!(report.overflowed, vec![8, 9]);
        assert_eq!(layout.occupancy().n_rows(), 2);
    }

    #[test]
    fn import_rejects_invalid_items() {
        let ext = |id, width, height| ExtItem {
            id,
            width,
            height,
            source: None,
        };
        assert!(import_items(&[ext(0, 10, 10), ext(2, 10, 10)]).is_err());
        assert!(import_items(&[ext(0, 0, 10)]).is_err());

        let items = import_items(&[ext(1, 20, 10), ext(0, 10, 20)]).unwrap();
        assert_eq!(items, vec![Item::new(0, 10, 20), Item::new(1, 20, 10)]);

        let json = r#"[{"id": 0, "width": 2048, "height": 100, "source": "a.png"}]"#;
        let ext_items: Vec<ExtItem> = serde_json::from_str(json).unwrap();
        let (layout, _) =
            import_layout(LayoutConfig::default(), &ext_items, WindowSize::new(800, 600)).unwrap();
        assert_eq!(layout.tile(0).unwrap().outer, Rect::new(0, 5, 400, 150));
    }

    #[test]
    fn config_validation() {
        let zero_tile = LayoutConfig {
            tile_width: 0,
            ..LayoutConfig::default()
        };
        assert!(zero_tile.validate().is_err());
        assert!(LayoutConfig::default().validate().is_ok());

        let json = r#"{"tile_width": 200, "tile_height": 150, "margin_y": 10, "capacity": {"mode": "fixed", "n_rows": 3}}"#;
        let config: LayoutConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.capacity, CapacityPolicy::Fixed { n_rows: 3 });
    }

    #[test]
    fn row_capacity_is_bounded_by_addressable_height() {
        let huge = LayoutConfig {
            tile_width: 65536,
            tile_height: 65536,
            margin_y: 65536,
            capacity: CapacityPolicy::Fixed { n_rows: 20_000 },
        };
        assert!(huge.validate().is_err());
        assert!(import_layout(huge, &[], WindowSize::new(65536, 600)).is_err());

        let unbounded = LayoutConfig {
            capacity: CapacityPolicy::Growing {
                max_rows: usize::MAX,
            },
            ..LayoutConfig::default()
        };
        assert!(unbounded.validate().is_err());

        // 16_383 rows with a pitch of 131_072px is the tallest grid that still fits in i32
        let tallest = LayoutConfig {
            capacity: CapacityPolicy::Fixed { n_rows: 16_383 },
            ..huge
        };
        assert!(tallest.validate().is_ok());
        let too_tall = LayoutConfig {
            capacity: CapacityPolicy::Fixed { n_rows: 16_384 },
            ..huge
        };
        assert!(too_tall.validate().is_err());
    }

    #[test]
    fn tallest_valid_grid_fills_without_overflow() {
        let config = LayoutConfig {
            tile_width: 65536,
            tile_height: 65536,
            margin_y: 65536,
            capacity: CapacityPolicy::Fixed { n_rows: 16_383 },
        };
        // tall items stack down the single column, a square takes the last row
        let n_tall = 8191;
        let items = (0..n_tall)
            .map(|id| Item::new(id, 1, 100))
            .chain([Item::new(n_tall, 1, 1)]);
        let (layout, report) = Layout::from_items(config, items, WindowSize::new(65536, 600));

        assert_eq!(report.n_placed, n_tall + 1);
        let last = layout.tile(n_tall).unwrap();
        assert_eq!(last.cell, 16_382);
        assert_eq!(last.outer, Rect::new(0, 16_382 * 131_072 + 32_768, 65536, 65536));
        assert_eq!(layout.content_height(), 16_383 * 131_072);
    }

    #[test]
    fn svg_contains_every_visible_tile() {
        let (layout, _) =
            Layout::from_items(LayoutConfig::default(), squares(20), WindowSize::new(800, 600));
        let mut scroll = ScrollState::default();

        let full = layout_to_svg(&layout, &scroll, SvgDrawOptions::default()).to_string();
        assert!(full.contains("tile_0"));
        assert!(full.contains("tile_19"));
        assert!(full.contains("viewport"));

        scroll.apply_delta(-20, false);
        let options = SvgDrawOptions {
            clip_to_window: true,
            occupancy: true,
            ..SvgDrawOptions::default()
        };
        let clipped = layout_to_svg(&layout, &scroll, options).to_string();
        assert!(!clipped.contains("\"tile_0\""));
        assert!(clipped.contains("tile_19"));
        assert!(clipped.contains("cells"));
    }
}
