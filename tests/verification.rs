//! Literal-vector checks for each classifier and for the composed scene.

use vgapix::bar::{is_bar_pixel, BarLayout};
use vgapix::bitmap::{TOP_LINE_GLYPH, U_GLYPH};
use vgapix::common::{Coord, Pixel, SCREEN_HEIGHT, SCREEN_WIDTH};
use vgapix::compositor::Compositor;
use vgapix::frame::FrameState;
use vgapix::pattern::is_static_pixel;
use vgapix::shape::{Layer, Shape};
use vgapix::sine_lut;
use vgapix::sprite::{is_sprite_pixel, Player, SpritePosition};

const SINE_VALUES_TABLE: [(usize, i16); 10] = [
    (0, 50),
    (1, 40),
    (2, 30),
    (3, 20),
    (4, 10),
    (5, 0),
    (6, 10),
    (7, 20),
    (8, 30),
    (9, 40),
];

#[test]
fn sine_lut_vectors() {
    for (index, value) in SINE_VALUES_TABLE {
        assert_eq!(sine_lut::lookup(index), value, "pos={}", index);
    }
}

#[test]
fn bar_vectors() {
    // (pix_x, pix_y, x_offset, expected)
    let vectors: [(Coord, Coord, u32, bool); 12] = [
        (0, 180, 0, true),
        (0, 239, 0, true),
        (0, 240, 0, false),
        (0, 291, 0, true),
        (24, 350, 0, true),
        (25, 350, 0, false),
        (200, 289, 0, true),
        (200, 300, 0, false),
        (0, 300, 200, false),
        (0, 289, 200, true),
        (15, 200, 9, true),
        (15, 200, 10, false),
    ];
    for (x, y, offset, expected) in vectors {
        assert_eq!(is_bar_pixel(x, y, offset), expected, "bar ({}, {}) offset {}", x, y, offset);
    }
}

#[test]
fn sprite_reproduces_glyph_at_origin() {
    assert!(is_sprite_pixel(95, 90, 100, 100, &U_GLYPH));
    assert!(!is_sprite_pixel(98, 90, 100, 100, &U_GLYPH));

    for row in 0..16i32 {
        for col in 0..11i32 {
            let x = (95 + col) as Coord;
            let y = (90 + row) as Coord;
            assert_eq!(
                is_sprite_pixel(x, y, 100, 100, &U_GLYPH),
                U_GLYPH.cell(col, row),
                "local ({}, {})",
                col,
                row
            );
        }
    }
}

#[test]
fn player_segments_each_reproduce_glyph() {
    let player = Player::default();
    let origin = SpritePosition::new(200, 100);

    for (segment, dx) in [0i32, 17, 27].into_iter().enumerate() {
        for row in 0..16i32 {
            for col in 0..11i32 {
                let x = (195 + dx + col) as Coord;
                let y = (90 + row) as Coord;
                let hits = player.segment_hits(x, y, origin);
                assert_eq!(hits[segment], U_GLYPH.cell(col, row), "segment {} local ({}, {})", segment, col, row);
                assert_eq!(player.is_player_pixel(x, y, origin), hits.iter().any(|&h| h));
            }
        }
    }
}

#[test]
fn static_pattern_quantization() {
    for y in 10..18 {
        for x in 250..258 {
            assert_eq!(is_static_pixel(x, y), TOP_LINE_GLYPH.cell(0, 0));
        }
        for x in 258..266 {
            assert_eq!(is_static_pixel(x, y), TOP_LINE_GLYPH.cell(1, 0));
        }
    }

    for cell_y in 0..16i32 {
        for cell_x in 0..14i32 {
            // Sample the centre of each magnified cell
            let x = (250 + cell_x * 8 + 4) as Coord;
            let y = (10 + cell_y * 8 + 4) as Coord;
            assert_eq!(is_static_pixel(x, y), TOP_LINE_GLYPH.cell(cell_x, cell_y));
        }
    }
}

#[test]
fn out_of_rectangle_is_false() {
    let frame = FrameState::new(0, SpritePosition::new(100, 100));
    let shapes = [
        Shape::from(BarLayout::default()),
        Shape::from(Player::default()),
        Shape::from(vgapix::sprite::Sprite::default()),
        Shape::from(vgapix::pattern::StaticPattern::default()),
    ];

    for shape in shapes {
        let bounds = shape.bounds(&frame);
        let mut outside = Vec::new();
        for y in bounds.top - 1..=bounds.bottom {
            outside.push((bounds.left - 1, y));
            outside.push((bounds.right, y));
        }
        for x in bounds.left - 1..=bounds.right {
            outside.push((x, bounds.top - 1));
            outside.push((x, bounds.bottom));
        }

        for (x, y) in outside {
            let on_screen = x >= 0 && y >= 0 && (x as usize) < SCREEN_WIDTH && (y as usize) < SCREEN_HEIGHT;
            if on_screen {
                let pixel = Pixel::new(x as Coord, y as Coord);
                assert!(!shape.covers(pixel, &frame), "{:?} at ({}, {})", shape.layer(), x, y);
            }
        }
    }
}

/// Composed-system mode: the compositor agrees with its constituents
#[test]
fn composed_scene_matches_classifiers() {
    let compositor = Compositor::default();
    let frame = FrameState::new(160, SpritePosition::new(40, 200));
    let player = Player::default();
    let bars = BarLayout::default();

    for y in (0..SCREEN_HEIGHT).step_by(3) {
        for x in (0..SCREEN_WIDTH).step_by(3) {
            let (x, y) = (x as Coord, y as Coord);
            let expected = if player.is_player_pixel(x, y, frame.sprite) {
                Some(Layer::Player)
            } else if bars.is_bar_pixel(x, y, frame.scroll_offset) {
                Some(Layer::Bar)
            } else if is_static_pixel(x, y) {
                Some(Layer::StaticPattern)
            } else {
                None
            };
            assert_eq!(compositor.classify(Pixel::new(x, y), &frame), expected, "({}, {})", x, y);
        }
    }
}

#[test]
fn queries_are_idempotent() {
    let compositor = Compositor::default();
    let frame = FrameState::new(33, SpritePosition::new(320, 240));
    for &(x, y) in &[(0, 0), (100, 200), (320, 240), (300, 50), (639, 399)] {
        let pixel = Pixel::new(x, y);
        assert_eq!(compositor.classify(pixel, &frame), compositor.classify(pixel, &frame));
    }
}
