//! First Image - the symmetric Adinkrahene face artwork
//!
//! About a hundred motifs stacked into one mirrored face: a central spine,
//! necks and pillars, rows of eyes and mouths, triangle stacks and the
//! Adinkrahene image itself repeated as faces. Everything is laid out once
//! against the canvas size at setup and then only animated.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use std::sync::Arc;

use super::{Assets, Sketch};
use crate::patterns::*;
use crate::render::Surface;
use crate::shapes::{Bounds, ImageAsset, Motion, Rgba, Scene, ShapeConfig};

const IMAGE_NAME: &str = "adinkrahene.png";

pub struct FirstImage {
    scene: Option<Scene>,
}

impl FirstImage {
    pub fn new() -> Self {
        Self { scene: None }
    }

    /// The laid-out scene, once set up
    #[cfg(test)]
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }
}

impl Default for FirstImage {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketch for FirstImage {
    fn name(&self) -> &str {
        "First Image"
    }

    fn setup(&mut self, surface: &mut dyn Surface, assets: &Assets) {
        surface.background(Rgba::gray(10.0));

        let image = assets.image_or_log(IMAGE_NAME);
        if image.is_none() {
            log::warn!("Adinkrahene image not loaded, image faces will stay empty");
        }

        let mut scene = Scene::new(Bounds::of(surface));
        spine(&mut scene);
        necks(&mut scene);
        triangle_mouths(&mut scene);
        quad_eyes(&mut scene);
        faces(&mut scene, &image);
        top_eyes(&mut scene);
        mid_eyes(&mut scene);
        pillars(&mut scene);
        diamonds(&mut scene);
        arms(&mut scene);
        triangles(&mut scene);
        ornaments(&mut scene);
        dots(&mut scene);
        bricks(&mut scene);

        log::info!("First Image laid out {} shapes", scene.len());
        self.scene = Some(scene);
    }

    fn draw(&mut self, surface: &mut dyn Surface, tick: u64) {
        surface.background(Rgba::gray_alpha(10.0, 50.0));
        if let Some(scene) = self.scene.as_mut() {
            scene.draw(surface, tick);
        }
    }
}

fn spine(scene: &mut Scene) {
    let b = scene.bounds();
    let (x, y) = b.at(0.5, 0.5);
    vertical_pipe(
        scene,
        &PipeOptions {
            x,
            y,
            motion: Motion::new().move_y(20.0, 0.01, 0.3),
            ..Default::default()
        },
    );
    vertical_pipe(
        scene,
        &PipeOptions {
            x,
            y,
            width: 8.0,
            color: Rgba::gray_alpha(12.0, 80.0),
            motion: Motion::new().move_y(30.0, 0.005, PI * 0.5),
            ..Default::default()
        },
    );
}

fn necks(scene: &mut Scene) {
    let b = scene.bounds();
    let necks = [
        (0.1, 15.0, 0.02, PI * 0.1),
        (0.275, 15.0, 0.03, PI * 0.06),
        (0.42, 10.0, 0.025, PI * 0.25),
        (0.58, 15.0, 0.02, PI * 0.15),
        (0.9, 12.0, 0.05, PI * 0.5),
        (0.725, 15.0, 0.04, PI * 0.6),
    ];
    for (fx, amplitude, frequency, offset) in necks {
        let (x, y) = b.at(fx, 0.55);
        long_neck_pair(
            scene,
            &LongNeckOptions {
                x,
                y,
                motion: Motion::new().move_y(amplitude, frequency, offset),
                ..Default::default()
            },
        );
    }
}

fn triangle_mouths(scene: &mut Scene) {
    let b = scene.bounds();
    let mouths = [
        (Side::Left, (8.0, 0.025, PI * 0.1), (10.0, 0.03, PI * 0.1), [0.05, 0.1]),
        (Side::Right, (7.0, 0.03, PI * 0.3), (8.0, 0.03, PI * 1.4), [0.06, 0.15]),
    ];
    for (side, (a1, f1, o1), (a2, f2, o2), [p2, p3]) in mouths {
        let (x, y) = b.at(0.1875, 0.92);
        single_triangle_mouth(
            scene,
            &TriangleMouthOptions {
                x,
                y,
                side,
                motion: Motion::new().move_y(a1, f1, o1),
                ..Default::default()
            },
        );
        let (x, y) = b.at(0.35, 0.86);
        nested_triangle_mouths(
            scene,
            &NestedTriangleMouthOptions {
                x,
                y,
                side,
                layer_y: [(0.0, 0.0), (PI * p2, 0.001), (PI * p3, 0.002)],
                motion: Motion::new().move_y(a2, f2, o2),
                ..Default::default()
            },
        );
    }
}

fn quad_eyes(scene: &mut Scene) {
    let b = scene.bounds();
    let y = b.height * 0.24;
    let stock = QuadEyeOptions::default();

    let eyes = [
        (0.12, stock.outer, stock.inner, (2.0, 0.03, PI * 0.1), PI * 1.05),
        (0.195, stock.outer, stock.inner, (2.0, -0.03, PI * 0.2), PI * 1.05),
        (
            0.44,
            [(0.0, -5.0), (45.0, -5.0), (45.0, 15.55), (15.0, 15.55)],
            [(10.0, 0.0), (40.0, 0.0), (40.0, 10.55), (17.0, 10.55)],
            (2.5, 0.01, PI * 0.3),
            PI * 1.25,
        ),
        (
            0.5,
            [(15.0, -5.0), (60.0, -5.0), (46.6, 15.55), (15.0, 15.55)],
            [(20.0, 0.0), (50.0, 0.0), (44.0, 10.55), (20.0, 10.55)],
            (2.0, -0.01, PI * 0.4),
            -PI * 1.05,
        ),
        (0.745, stock.outer, stock.inner, (3.0, -0.01, PI * 0.5), PI * 1.45),
        (0.82, stock.outer, stock.inner, (4.0, 0.01, PI * 0.6), PI * 1.05),
    ];
    for (fx, outer, inner, (amplitude, frequency, offset), inner_dy) in eyes {
        quad_eye_pair(
            scene,
            &QuadEyeOptions {
                x: b.width * fx,
                y,
                outer,
                inner,
                inner_offset: (0.0, inner_dy),
                motion: Motion::new().move_y(amplitude, frequency, offset),
                ..Default::default()
            },
        );
    }
}

/// Image faces and the motifs layered around them.
///
/// The ellipse mouths and forehead do not need the image and are laid out
/// even when it failed to load.
fn faces(scene: &mut Scene, image: &Option<Arc<ImageAsset>>) {
    let b = scene.bounds();

    adinkrahene_face(
        scene,
        &AdinkraheneFaceOptions {
            image: image.clone(),
            center_x: b.width * 0.65,
            center_y: b.height * 0.5,
            motion: Motion::new().move_x(12.0, 0.015, PI * 1.25),
            ..Default::default()
        },
    );
    adinkrahene_face(
        scene,
        &AdinkraheneFaceOptions {
            image: image.clone(),
            center_x: b.width * 0.35,
            center_y: b.height * 0.5,
            motion: Motion::new()
                .with_rotation_speed(0.01)
                .move_x(11.0, -0.015, PI * 1.25),
            ..Default::default()
        },
    );

    let (x, y) = b.at(0.188, 0.42);
    for (side, amplitude, frequency, offset, inner_dy) in [
        (Side::Left, 25.0, 0.0075, FRAC_PI_2, PI * 1.05),
        (Side::Right, 30.0, 0.009, FRAC_PI_2 + PI, PI * 1.5),
    ] {
        ellipse_mouth_pair(
            scene,
            &EllipseMouthOptions {
                x,
                y,
                side,
                inner_offset: (0.0, inner_dy),
                motion: Motion::new().move_x(amplitude, frequency, offset),
                ..Default::default()
            },
        );
    }

    let (x, y) = b.at(0.125, 0.5);
    for (side, speed, amplitude, frequency, offset) in [
        (Side::Left, 0.002, 20.0, 0.015, PI * 1.5),
        (Side::Right, -0.001, 18.0, -0.012, PI * 1.2),
    ] {
        strange_adinkra_being(
            scene,
            &StrangeBeingOptions {
                image: image.clone(),
                x,
                y,
                side,
                motion: Motion::new()
                    .with_rotation_speed(speed)
                    .move_x(amplitude, frequency, offset),
                ..Default::default()
            },
        );
    }

    central_adinkra_group(
        scene,
        &CentralGroupOptions {
            image: image.clone(),
            center_x: b.width * 0.5,
            center_y: b.height * 0.5,
            motion: Motion::new()
                .with_rotation_speed(0.0009)
                .move_y(10.0, 0.01, PI * 1.1)
                .move_x(10.0, -0.02, PI * 0.9),
            ..Default::default()
        },
    );

    central_forehead_rects(
        scene,
        &ForeheadOptions {
            center_x: b.width * 0.5,
            y: b.height * 0.29,
            offset_y_thin: PI * 0.1,
            motion: Motion::new()
                .move_y(8.0, 0.015, PI * 1.2)
                .move_x(6.0, -0.01, FRAC_PI_2),
            ..Default::default()
        },
    );

    quad_grid(
        scene,
        &QuadGridOptions {
            rows: 2,
            per_row: 9,
            quad_width: 90.0,
            quad_height: 6.0,
            horizontal_spacing: 120.0,
            vertical_padding: 9.0,
            initial_x: b.width * 0.001,
            initial_y: b.height * 0.66,
            motion: Motion {
                amplitude_y: Some(13.0),
                frequency_x: Some(-0.01),
                ..Default::default()
            },
        },
    );
}

fn top_eyes(scene: &mut Scene) {
    let b = scene.bounds();
    let y = b.height * 0.29;

    for (fx, speed, frequency, offset) in [
        (0.1, 0.0001, 0.012, PI * 1.4),
        (0.275, -0.0001, 0.012, -PI * 1.4),
        (0.9, -0.0002, 0.013, PI * 1.4),
        (0.725, 0.0002, 0.013, -PI * 1.4),
    ] {
        complex_eye(
            scene,
            &ComplexEyeOptions {
                x: b.width * fx,
                y,
                eyelid_rotation: -PI,
                inside_eyelid_offset: (PI * 0.5, 0.0),
                motion: Motion::new()
                    .with_rotation_speed(speed)
                    .move_x(9.0, frequency, offset),
                ..Default::default()
            },
        );
    }

    for (fx, speed) in [(0.58, 0.0008), (0.42, -0.0008)] {
        complex_eye(
            scene,
            &ComplexEyeOptions {
                x: b.width * fx,
                y,
                eyelid_color: Rgba::gray_alpha(10.0, 90.0),
                eyelid_rotation: -FRAC_PI_2,
                motion: Motion::new()
                    .with_rotation_speed(speed)
                    .move_x(8.0, 0.001, PI * 1.1),
                ..Default::default()
            },
        );
    }
}

fn mid_eyes(scene: &mut Scene) {
    let b = scene.bounds();
    let eyes = [
        (
            b.at(0.55, 0.5),
            Motion::new()
                .with_rotation_speed(0.001)
                .move_x(12.0, 0.005, PI * 1.5),
        ),
        (
            b.at(0.45, 0.5),
            Motion::new()
                .with_rotation_speed(0.001)
                .move_x(12.0, -0.005, -PI * 1.5),
        ),
        (
            b.at(0.5, 0.65),
            Motion::new()
                .with_rotation_speed(-0.015)
                .move_y(15.0, 0.006, PI * 2.5),
        ),
    ];
    for ((x, y), motion) in eyes {
        simple_eye(
            scene,
            &SimpleEyeOptions {
                x,
                y,
                motion,
                ..Default::default()
            },
        );
    }
}

/// Nested pillars, each followed by its stack of bars
fn pillars(scene: &mut Scene) {
    let b = scene.bounds();
    // Alpha 0 really is invisible here, so the two inner columns show only
    // their middle and inner rects, not an opaque white outer one
    let hidden = Rgba::new(255.0, 255.0, 255.0, 0.0);

    let columns = [
        // (x, side, outer color, pillar (f, φ), stack start, bars, bar width, stack (f, φ))
        (0.025, Side::Left, Rgba::WHITE, (0.005, 0.0), 0.35, 5, 25.0, (0.008, 0.0)),
        (0.025, Side::Right, Rgba::WHITE, (0.005, PI), 0.35, 5, 25.0, (0.02, PI)),
        (0.65, Side::Left, hidden, (0.006, PI * 0.25), 0.3, 6, 20.0, (0.008, PI * 0.25)),
        (0.35, Side::Left, hidden, (0.005, PI * 1.25), 0.3, 6, 20.0, (0.008, PI * 0.75)),
    ];
    for (fx, side, outer_color, (pf, po), start, count, bar_width, (sf, so)) in columns {
        nested_rect_pillar(
            scene,
            &NestedPillarOptions {
                x: b.width * fx,
                y: b.height * 0.55,
                side,
                outer_color,
                middle_offset: (0.0, PI * 0.1),
                inner_offset: (0.0, PI * 0.2),
                motion: Motion::new().move_y(20.0, pf, po),
                ..Default::default()
            },
        );
        vertical_rect_stack(
            scene,
            &RectStackOptions {
                x: b.width * fx,
                initial_y: b.height * start,
                count,
                spacing_y: b.height * 0.1,
                rect_width: bar_width,
                side,
                stagger_offset_y: PI * 0.05,
                motion: Motion::new().move_y(10.0, sf, so),
                ..Default::default()
            },
        );
    }
}

fn diamonds(scene: &mut Scene) {
    let b = scene.bounds();
    let (x, y) = b.at(0.5, 0.575);
    nested_diamond_squares(
        scene,
        &NestedDiamondOptions {
            x,
            y,
            stagger: (PI * 1.02, PI * 0.02),
            motion: Motion::new()
                .move_y(10.0, 0.005, 0.0)
                .with_rotation_speed(0.001),
            ..Default::default()
        },
    );

    for (fx, speed, offset) in [
        (0.31, 0.002, 0.0),
        (0.385, -0.002, PI),
        (0.615, -0.002, PI * 0.5),
        (0.69, 0.002, PI * 1.5),
    ] {
        let (x, y) = b.at(fx, 0.725);
        diamond_square_eye(
            scene,
            &DiamondSquareEyeOptions {
                x,
                y,
                motion: Motion::new()
                    .with_rotation_speed(speed)
                    .move_y(10.0, 0.007, offset),
                ..Default::default()
            },
        );
    }

    let (center_x, center_y) = b.at(0.5, 0.75);
    being_neck_pair(
        scene,
        &BeingNeckOptions {
            center_x,
            center_y,
            color: Rgba::gray_alpha(255.0, 90.0),
            stroke_weight: 0.0,
            horizontal_offset: Some(b.width * 0.05),
            left_offset: (PI * 1.1, 0.0),
            right_offset: (PI * 0.2, 0.0),
            motion: Motion::new().move_y(10.0, 0.008, PI * 1.1),
            ..Default::default()
        },
    );
}

/// Side eyes, connectors and the long necks with mouths, left then right
fn arms(scene: &mut Scene) {
    let b = scene.bounds();
    let y = b.height * 0.62;

    struct Arm {
        eyes: [(f32, f32, f32, [f32; 3]); 2],
        eye_frequency: f32,
        connector: (f32, f32, f32),
        side: Side,
        neck_width: f32,
        neck: (f32, f32),
        mouth_outer_dy: f32,
    }

    let arms = [
        Arm {
            eyes: [
                (0.12, 0.002, PI * 1.1, [0.15, 0.1, 0.19]),
                (0.255, -0.002, PI * 1.25, [0.05, 0.1, 0.19]),
            ],
            eye_frequency: 0.008,
            connector: (0.186, 0.008, FRAC_PI_2),
            side: Side::Left,
            neck_width: 170.0,
            neck: (0.008, PI * 1.25),
            mouth_outer_dy: PI * 0.25,
        },
        Arm {
            eyes: [
                (0.88, -0.001, PI * 0.5, [0.05, 0.1, 0.15]),
                (0.745, 0.001, PI * 1.5, [0.05, 0.1, 0.15]),
            ],
            eye_frequency: 0.009,
            connector: (0.814, 0.005, PI * 1.25),
            side: Side::Right,
            neck_width: 150.0,
            neck: (-0.008, PI * 1.15),
            mouth_outer_dy: -PI * 0.25,
        },
    ];

    for arm in arms {
        for (fx, speed, offset, [middle, inner, pupil]) in arm.eyes {
            nested_rect_eye(
                scene,
                &NestedRectEyeOptions {
                    x: b.width * fx,
                    y,
                    middle_offset: (0.0, PI * middle),
                    inner_offset: (0.0, PI * inner),
                    pupil_offset: (0.0, PI * pupil),
                    motion: Motion::new()
                        .with_rotation_speed(speed)
                        .move_y(8.0, arm.eye_frequency, offset),
                    ..Default::default()
                },
            );
        }

        let (fx, frequency, offset) = arm.connector;
        connecting_vertical_rect(
            scene,
            &ConnectorOptions {
                x: b.width * fx,
                y,
                motion: Motion::new().move_y(12.0, frequency, offset),
                ..Default::default()
            },
        );

        let (x, neck_y) = b.at(0.1875, 0.57);
        let (frequency, offset) = arm.neck;
        long_rect_neck_with_mouth(
            scene,
            &NeckMouthOptions {
                x,
                y: neck_y,
                side: arm.side,
                neck_size: (arm.neck_width, 30.0),
                mouth_outer_offset: (0.0, arm.mouth_outer_dy),
                mouth_inner_offset: (0.0, PI * 0.1),
                motion: Motion::new().move_y(4.0, frequency, offset),
                ..Default::default()
            },
        );
    }
}

fn triangles(scene: &mut Scene) {
    let b = scene.bounds();
    let x = b.width * 0.1875;
    let faint = Rgba::gray_alpha(255.0, 25.0);
    let bottom: Vec<TriangleConfig> = [
        (80.0, faint),
        (60.0, faint),
        (40.0, Rgba::WHITE),
        (20.0, Rgba::gray_alpha(20.0, 90.0)),
        (10.0, Rgba::gray(20.0)),
    ]
    .into_iter()
    .map(|(d, color)| TriangleConfig {
        stroke_weight: Some(0.0),
        ..TriangleConfig::new((-d, d), (d, d), color)
    })
    .collect();

    for side in Side::both() {
        concentric_bottom_triangles(
            scene,
            &ConcentricTrianglesOptions {
                x,
                y: b.height * 0.75,
                side,
                triangles: bottom.clone(),
                ..Default::default()
            },
        );
    }

    for (fx, fy, depth) in [(0.1875, 0.42, 60.0), (0.8125, 0.41, 50.0)] {
        single_inverted_triangle(
            scene,
            &InvertedTriangleOptions {
                x: b.width * fx,
                y: b.height * fy,
                vertices: [(0.0, -60.0), (-60.0, depth), (60.0, depth)],
                color: Rgba::gray_alpha(255.0, 30.0),
                stroke_weight: 2.0,
                ..Default::default()
            },
        );
    }

    let pyramid: Vec<TriangleConfig> = [
        (60.0, Rgba::WHITE, 3.0),
        (40.0, Rgba::gray_alpha(180.0, 80.0), 1.0),
        (20.0, Rgba::gray_alpha(25.0, 80.0), 0.0),
    ]
    .into_iter()
    .map(|(d, color, weight)| TriangleConfig {
        v1y: -120.0,
        stroke_weight: Some(weight),
        ..TriangleConfig::new((-d, 1.0), (d, 1.0), color)
    })
    .collect();

    for side in Side::both() {
        pyramid_triangles(
            scene,
            &PyramidOptions {
                x,
                y: b.height * 0.42,
                side,
                triangles: pyramid.clone(),
                ..Default::default()
            },
        );
    }

    let dark = Rgba::gray_alpha(25.0, 80.0);
    let top: Vec<TriangleConfig> = [(30.0, dark), (15.0, dark), (5.0, Rgba::gray(25.0))]
        .into_iter()
        .map(|(d, color)| TriangleConfig {
            stroke_weight: Some(1.0),
            ..TriangleConfig::new((-d, d), (d, d), color)
        })
        .collect();

    for (side, fy) in [(Side::Left, 0.42), (Side::Right, 0.41)] {
        concentric_top_inverted_triangles(
            scene,
            &ConcentricTrianglesOptions {
                x,
                y: b.height * fy,
                side,
                triangles: top.clone(),
                ..Default::default()
            },
        );
    }
}

fn ornaments(scene: &mut Scene) {
    let b = scene.bounds();
    let rings = |rotation: f32, core: Rgba| {
        [
            (50.0, Rgba::WHITE),
            (20.0, Rgba::gray(12.0)),
            (8.0, core),
        ]
        .into_iter()
        .map(|(height, color)| EllipseConfig {
            width: 120.0,
            height,
            color,
            rotation,
        })
        .collect::<Vec<_>>()
    };

    let (x, y) = b.at(0.49, 0.8);
    concentric_bottom_ellipses(
        scene,
        &BottomEllipsesOptions {
            x,
            y,
            left: rings(-FRAC_PI_4, Rgba::gray(250.0)),
            right: rings(FRAC_PI_4, Rgba::WHITE),
            motion: Motion::new().move_x(12.0, 0.001, FRAC_PI_4),
        },
    );

    horizontal_line(
        scene,
        &HorizontalLineOptions {
            y: b.height * 0.5,
            stroke_weight: 2.0,
            ..Default::default()
        },
    );
}

fn dots(scene: &mut Scene) {
    let b = scene.bounds();
    // (x, y, dot size, amplitude, frequency sign)
    let dots = [
        (0.55, 0.5, 8.0, 3.0, 1.0),
        (0.45, 0.5, 8.0, 3.0, -1.0),
        (0.42, 0.29, 3.0, 3.0, 1.0),
        (0.58, 0.29, 3.0, 3.0, -1.0),
        (0.465, 0.25, 3.0, 3.0, -1.0),
        (0.535, 0.25, 3.0, 3.0, 1.0),
        (0.47, 0.325, 11.0, 3.0, 1.0),
        (0.53, 0.325, 11.0, 3.0, -1.0),
        (0.25, 0.5, 5.0, 3.0, -1.0),
        (0.125, 0.5, 5.0, 3.0, 1.0),
        (0.275, 0.29, 3.0, 2.0, 1.0),
        (0.1, 0.29, 3.0, 2.0, -1.0),
        (0.225, 0.25, 5.0, 3.0, -1.0),
        (0.15, 0.25, 5.0, 3.0, 1.0),
        (0.75, 0.5, 5.0, 3.0, 1.0),
        (0.875, 0.5, 5.0, 3.0, -1.0),
        (0.725, 0.29, 3.0, 2.0, -1.0),
        (0.9, 0.29, 3.0, 2.0, 1.0),
        (0.775, 0.25, 5.0, 3.0, 1.0),
        (0.85, 0.25, 5.0, 3.0, -1.0),
    ];
    for (fx, fy, size, amplitude, sign) in dots {
        let (x, y) = b.at(fx, fy);
        let frequency = 0.01 * sign;
        eye_dots(
            scene,
            &EyeDotsOptions {
                x,
                y,
                stroke_weight: size,
                motion: Motion {
                    amplitude_x: Some(amplitude),
                    frequency_x: Some(frequency),
                    amplitude_y: Some(amplitude),
                    frequency_y: Some(frequency),
                    ..Default::default()
                },
                ..Default::default()
            },
        );
    }
}

/// Brick rows at the top and bottom edges, then the bottom bar
fn bricks(scene: &mut Scene) {
    let b = scene.bounds();
    for (rows, per_row, (w, h), spacing, padding, fy, amplitude) in [
        (4, 8, (80.0, 20.0), 100.0, 10.0, 0.008, 3.0),
        (3, 9, (60.0, 24.0), 120.0, 9.0, 0.89, 4.0),
    ] {
        quad_grid(
            scene,
            &QuadGridOptions {
                rows,
                per_row,
                quad_width: w,
                quad_height: h,
                horizontal_spacing: spacing,
                vertical_padding: padding,
                initial_x: b.width * 0.001,
                initial_y: b.height * fy,
                motion: Motion {
                    amplitude_y: Some(amplitude),
                    ..Default::default()
                },
            },
        );
    }

    let (x, y) = b.at(0.5, 0.95);
    scene.add(
        ShapeConfig::rect(1000.0, 90.0)
            .at(x, y)
            .fill(Rgba::gray_alpha(25.0, 80.0))
            .stroke(Rgba::BLACK, 1.0)
            .rotation(PI)
            .motion(Motion::new().move_y(8.0, 0.005, 0.0)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recorder::{DrawCall, Recorder};
    use crate::shapes::ShapeKind;
    use image::RgbaImage;

    fn set_up(assets: &Assets) -> (FirstImage, Recorder) {
        let mut sketch = FirstImage::new();
        let mut surface = Recorder::new(1000.0, 600.0);
        sketch.setup(&mut surface, assets);
        (sketch, surface)
    }

    #[test]
    fn test_setup_paints_opaque_background() {
        let (sketch, surface) = set_up(&Assets::none());
        assert_eq!(surface.calls, vec![DrawCall::Background(Rgba::gray(10.0))]);
        assert!(sketch.scene().map_or(false, |s| s.len() > 100));
    }

    #[test]
    fn test_layout_ends() {
        let (sketch, _) = set_up(&Assets::none());
        let scene = sketch.scene().unwrap();

        let pipe = scene.get(0).unwrap();
        assert_eq!(pipe.kind(), ShapeKind::Rect);
        assert_eq!((pipe.base_position().x, pipe.base_position().y), (500.0, 300.0));
        assert_eq!(pipe.motion_y().amplitude, 20.0);

        let bar = scene.get(scene.len() - 1).unwrap();
        assert_eq!(bar.dimensions(), Some((1000.0, 90.0)));
        assert!((bar.base_position().y - 570.0).abs() < 1e-3);
        assert_eq!(bar.rotation(), PI);
    }

    #[test]
    fn test_draw_trails_then_paints() {
        let (mut sketch, mut surface) = set_up(&Assets::none());
        surface.clear();
        sketch.draw(&mut surface, 1);
        assert_eq!(surface.calls[0], DrawCall::Background(Rgba::gray_alpha(10.0, 50.0)));
        assert!(surface.primitive_count() > 100);
        assert_eq!(surface.depth(), 0);
        // No image loaded, so nothing is blitted
        assert!(!surface
            .calls
            .iter()
            .any(|call| matches!(call, DrawCall::Image(..))));
    }

    #[test]
    fn test_without_image_faces_are_empty() {
        let (sketch, _) = set_up(&Assets::none());
        let scene = sketch.scene().unwrap();
        let images: Vec<_> = scene
            .iter()
            .filter(|s| s.kind() == ShapeKind::Image)
            .collect();
        assert_eq!(images.len(), 23);
        assert!(images.iter().all(|s| s.image().is_none()));
    }

    #[test]
    fn test_with_image_faces_share_asset() {
        let dir = std::env::temp_dir().join(format!("mandala-first-image-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        RgbaImage::from_pixel(4, 4, image::Rgba([200, 10, 10, 255]))
            .save(dir.join(IMAGE_NAME))
            .unwrap();

        let (mut sketch, mut surface) = set_up(&Assets::new(&dir));
        let scene = sketch.scene().unwrap();
        let shared: Vec<_> = scene.iter().filter_map(|s| s.image()).collect();
        assert_eq!(shared.len(), 23);
        assert!(shared.windows(2).all(|w| Arc::ptr_eq(w[0], w[1])));

        sketch.draw(&mut surface, 1);
        let blits = surface
            .calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Image(..)))
            .count();
        assert_eq!(blits, 23);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_mirrored_mouths() {
        let (sketch, _) = set_up(&Assets::none());
        let scene = sketch.scene().unwrap();
        let mouths: Vec<f32> = scene
            .iter()
            .filter(|s| s.kind() == ShapeKind::Triangle && (s.base_position().y - 552.0).abs() < 1e-3)
            .map(|s| s.base_position().x)
            .collect();
        assert_eq!(mouths.len(), 2);
        assert!((mouths[0] + mouths[1] - 1000.0).abs() < 1e-3);
    }

    #[test]
    fn test_inner_pillars_have_invisible_outer_rect() {
        let (sketch, _) = set_up(&Assets::none());
        let scene = sketch.scene().unwrap();
        let hidden: Vec<_> = scene.iter().filter(|s| s.base_fill().a == 0.0).collect();
        assert_eq!(hidden.len(), 2);
        assert!(hidden
            .iter()
            .all(|s| s.kind() == ShapeKind::Rect && s.stroke_weight() == 0.0));
    }
}
