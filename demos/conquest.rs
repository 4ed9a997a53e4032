//! Territory-conquest style demo: planets as graph nodes around the origin. Fly with WASD and
//! the mouse, then press keys to simulate the game events that auto-frame points of interest.

use bevy::prelude::*;
use bevy_focus_cam::prelude::*;
use rand::seq::SliceRandom;

fn main() {
    App::new()
        .add_plugins((DefaultPlugins, DefaultFocusCamPlugins))
        .insert_resource(FocusCamSettings {
            movement_speed: 10.0,
            auto_focus: true,
            sensitivity: 0.5,
        })
        .add_systems(Startup, setup)
        .add_systems(Update, trigger_focus)
        .run();
}

#[derive(Component)]
struct Planet;

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 8.0, 30.0).looking_at(Vec3::ZERO, Vec3::Y),
        {
            let mut cam = FocusCam::default();
            cam.focus_speed = 0.6;
            cam.focus_distance = 4.0;
            cam.zoom_speed = 40f32.to_radians();
            cam
        },
    ));

    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            range: 200.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(20.0, 40.0, 20.0),
    ));

    let mesh = meshes.add(Sphere::new(1.0));
    for i in 0..10 {
        let angle = i as f32 / 10.0 * std::f32::consts::TAU;
        let radius = 12.0 + 4.0 * (i % 3) as f32;
        let hue = i as f32 * 36.0;
        commands.spawn((
            Planet,
            Mesh3d(mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::hsl(hue, 0.8, 0.5),
                ..default()
            })),
            Transform::from_xyz(
                radius * angle.cos(),
                (i % 4) as f32 - 1.5,
                radius * angle.sin(),
            ),
        ));
    }

    let text = "WASD - Move (Shift boost, Ctrl precision)\n\
                Mouse - Look, Scroll - Zoom\n\
                1 - Inspect a random planet\n\
                2 - Frame a random battle (locks until you touch a key)";
    commands.spawn((
        Text::new(text),
        Node {
            margin: UiRect::all(Val::Px(20.0)),
            ..default()
        },
    ));
}

fn trigger_focus(
    keys: Res<ButtonInput<KeyCode>>,
    planets: Query<&Transform, With<Planet>>,
    cameras: Query<Entity, With<FocusCam>>,
    mut singles: EventWriter<FocusSingle>,
    mut pairs: EventWriter<FocusPair>,
) {
    let Ok(camera) = cameras.get_single() else {
        return;
    };
    let positions: Vec<Vec3> = planets.iter().map(|t| t.translation).collect();
    let mut rng = rand::thread_rng();

    if keys.just_pressed(KeyCode::Digit1) {
        if let Some(point) = positions.choose(&mut rng) {
            singles.send(FocusSingle {
                camera,
                point: *point,
            });
        }
    }
    if keys.just_pressed(KeyCode::Digit2) {
        let picks: Vec<&Vec3> = positions.choose_multiple(&mut rng, 2).collect();
        if let [a, b] = picks[..] {
            pairs.send(FocusPair {
                camera,
                a: *a,
                b: *b,
            });
        }
    }
}
