use crate::geometry::alias::{Color, Point, Vector};
use crate::material::material_properties::Material;
use crate::objects::cuboid::Cuboid;
use crate::objects::sphere::Sphere;
use crate::scene::catalog::{ceiling_light, wall, Wall};
use crate::scene::descriptor::{SceneBuilder, SceneDescriptor};
use strum::IntoEnumIterator;

const WHITE: Color = Color::new(1.0, 1.0, 1.0);
const BLACK: Color = Color::new(0.0, 0.0, 0.0);
const RED: Color = Color::new(1.0, 0.0, 0.0);
const GREEN: Color = Color::new(0.0, 1.0, 0.0);
const BLUE: Color = Color::new(0.0, 0.0, 1.0);

const ROOM_FAR: f64 = -2.0;

#[must_use]
pub(crate) fn cornell() -> SceneDescriptor {
    let matte = Material::diffuse();
    let mut builder = SceneBuilder::new();
    builder.add_sphere(Sphere::new(Point::new(-0.5, -0.4, -1.4), 0.5, WHITE, matte));
    builder.add_sphere(Sphere::new(Point::new(0.07, 0.42, -1.5), 0.39, Color::new(0.4, 0.9, 0.8), Material::metal(1.0, 0.0, 0.7)));
    builder.add_quad(wall(Wall::Left, ROOM_FAR, RED, matte));
    builder.add_quad(wall(Wall::Back, ROOM_FAR, WHITE, matte));
    builder.add_quad(wall(Wall::Ceiling, ROOM_FAR, WHITE, matte));
    builder.add_quad(wall(Wall::Right, ROOM_FAR, GREEN, matte));
    builder.add_quad(wall(Wall::Floor, ROOM_FAR, WHITE, matte));
    builder.add_quad(wall(Wall::Front, ROOM_FAR, BLUE, matte));
    builder.add_quad(ceiling_light(-1.5, 5.0));
    builder.add_cuboid(Cuboid::rectangular(
        Point::new(0.5, -0.5, -1.36),
        Vector::new(0.0, 0.0, 0.0),
        Vector::new(0.24, 0.5, 0.24),
        Color::new(0.03137254901960784, 0.23529411764705882, 0.6509803921568628),
        Material::metal(0.5, 0.5, 0.5),
    ));
    builder.with_background(BLACK, BLACK).with_render_budget(5, 10);
    builder.build()
}

/// Cornell-like room whose side walls are slightly blurred mirrors.
#[must_use]
pub(crate) fn mirror() -> SceneDescriptor {
    let matte = Material::diffuse();
    let looking_glass = Material::metal(1.0, 0.01, 1.0);
    let mut builder = SceneBuilder::new();
    builder.add_sphere(Sphere::new(Point::new(0.3, 0.0, -1.4), 0.5, Color::new(0.023529411764705882, 0.9764705882352941, 0.7843137254901961), matte));
    builder.add_sphere(Sphere::new(Point::new(-0.5, -0.4, -1.4), 0.3, Color::new(0.34901960784313724, 0.0, 1.0), Material::metal(1.0, 0.0, 0.5)));
    builder.add_quad(wall(Wall::Left, ROOM_FAR, WHITE, looking_glass));
    builder.add_quad(wall(Wall::Back, ROOM_FAR, WHITE, matte));
    builder.add_quad(wall(Wall::Ceiling, ROOM_FAR, WHITE, matte));
    builder.add_quad(wall(Wall::Right, ROOM_FAR, WHITE, looking_glass));
    builder.add_quad(wall(Wall::Floor, ROOM_FAR, WHITE, matte));
    builder.add_quad(wall(Wall::Front, ROOM_FAR, WHITE, matte));
    builder.add_quad(ceiling_light(-1.5, 2.0));
    builder.with_background(BLACK, BLACK).with_render_budget(3, 10);
    builder.build()
}

/// Closed mirror box lit by a hollow glowing sphere; reflections repeat
/// until the bounce budget runs out.
#[must_use]
pub(crate) fn infinite() -> SceneDescriptor {
    let mut builder = SceneBuilder::new();
    builder.add_sphere(Sphere::new(Point::new(0.3, 0.0, -1.0), 0.3, Color::new(0.4, 0.9, 0.8), Material::diffuse()));
    builder.add_sphere(Sphere::hollow(Point::new(-0.5, -0.4, -1.0), 0.25, WHITE, Material::diffuse().with_emission(1.0)));
    builder.add_sphere(Sphere::new(Point::new(-0.32, 0.5, -1.0), 0.2, RED, Material::metal(1.0, 0.0, 1.0)));
    for side in Wall::iter() {
        builder.add_quad(wall(side, ROOM_FAR, WHITE, Material::metal(1.0, 0.005, 1.0)));
    }
    builder.with_background(BLACK, BLACK).with_render_budget(5, 10);
    builder.build()
}

const GRID: [f64; 4] = [-0.75, -0.25, 0.25, 0.75];
const PILLAR_HALF_HEIGHTS: [f64; 4] = [1.2, 0.8, 0.4, 0.0];
const BALL_HEIGHTS: [f64; 4] = [0.3, -0.1, -0.5, -0.9];
const BALL_RADIUS: f64 = 0.125;

/// Four by four checkerboard of pillars, each topped with a small ball of
/// a different material, inside an open-floored room.
#[must_use]
pub(crate) fn person() -> SceneDescriptor {
    let balls: [[(Color, Material); 4]; 4] = [
        [
            (Color::new(1.0, 0.0, 0.0), Material::metal(1.0, 0.0, 0.1)),
            (Color::new(0.0, 1.0, 0.0), Material::metal(0.8, 0.2, 0.0).with_emission(0.5)),
            (Color::new(0.0, 0.0, 1.0), Material::metal(0.7, 0.3, 0.6)),
            (Color::new(1.0, 1.0, 0.0), Material::metal(0.6, 0.4, 0.0).with_emission(1.0)),
        ],
        [
            (Color::new(1.0, 0.5, 0.0), Material::metal(0.8, 0.2, 0.0).with_emission(0.7)),
            (Color::new(0.8, 0.0, 0.8), Material::metal(0.5, 0.5, 0.3)),
            (Color::new(0.0, 1.0, 1.0), Material::metal(0.4, 0.6, 0.0).with_emission(0.8)),
            (Color::new(1.0, 0.0, 1.0), Material::metal(1.0, 0.7, 0.5)),
        ],
        [
            (Color::new(0.2, 0.6, 1.0), Material::metal(0.2, 0.8, 0.0).with_emission(0.7)),
            (Color::new(1.0, 1.0, 1.0), Material::metal(0.1, 0.9, 0.0).with_emission(1.0)),
            (Color::new(0.6, 0.2, 0.8), Material::dielectric(1.0, 1.0, 0.0)),
            (Color::new(0.3, 1.0, 0.3), Material::metal(0.1, 0.0, 1.0)),
        ],
        [
            (Color::new(1.0, 0.5, 0.2), Material::metal(1.0, 0.0, 0.0)),
            (Color::new(0.2, 0.8, 0.8), Material::metal(0.9, 0.0, 0.1).with_emission(0.7)),
            (Color::new(1.0, 0.2, 0.2), Material::metal(0.5, 0.1, 0.2)),
            (Color::new(0.4, 0.4, 1.0), Material::metal(0.7, 0.3, 0.1).with_emission(1.0)),
        ],
    ];

    let mut builder = SceneBuilder::new();
    for (row, z) in [-2.75, -2.25, -1.75, -1.25].into_iter().enumerate() {
        for (column, x) in GRID.into_iter().enumerate() {
            let pillar_color = if (row + column) % 2 == 0 { WHITE } else { BLACK };
            builder.add_cuboid(Cuboid::rectangular(
                Point::new(x, -1.0, z),
                Vector::new(0.0, 0.0, 0.0),
                Vector::new(0.25, PILLAR_HALF_HEIGHTS[row], 0.25),
                pillar_color,
                Material::diffuse(),
            ));
            let (ball_color, ball_material) = balls[row][column];
            builder.add_sphere(Sphere::new(Point::new(x, BALL_HEIGHTS[row], z), BALL_RADIUS, ball_color, ball_material));
        }
    }

    let far = -3.0;
    let matte = Material::diffuse();
    builder.add_quad(wall(Wall::Left, far, RED, matte));
    builder.add_quad(wall(Wall::Back, far, WHITE, matte));
    builder.add_quad(wall(Wall::Ceiling, far, WHITE, matte));
    builder.add_quad(wall(Wall::Right, far, GREEN, matte));
    builder.add_quad(wall(Wall::Front, far, BLUE, matte));
    builder.add_quad(ceiling_light(-2.5, 5.0));
    builder.with_background(BLACK, BLACK).with_render_budget(3, 10);
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::sphere::SphereFacing;

    #[test]
    fn test_cornell_room_layout() {
        let system_under_test = cornell();

        assert_eq!(system_under_test.quads().len(), 7);
        let lights: Vec<_> = system_under_test.quads().iter().filter(|quad| quad.material().is_emissive()).collect();
        assert_eq!(lights.len(), 1);
        assert_eq!(lights[0].material().emission(), 5.0);
        assert_eq!(system_under_test.quads()[0].origin(), Point::new(-1.0, -1.0, 0.0));
        assert_eq!(system_under_test.quads()[0].color(), RED);
        assert_eq!(system_under_test.cuboids().len(), 1);
    }

    #[test]
    fn test_infinite_uses_hollow_light() {
        let system_under_test = infinite();

        let light = system_under_test.spheres()[1];
        assert_eq!(light.facing(), SphereFacing::Inward);
        assert_eq!(light.signed_radius(), -0.25);
        assert!(light.material().is_emissive());
        assert_eq!(system_under_test.quads().len(), 6);
    }

    #[test]
    fn test_person_grid() {
        let system_under_test = person();

        assert_eq!(system_under_test.cuboids().len(), 16);
        assert_eq!(system_under_test.spheres().len(), 16);
        assert_eq!(system_under_test.quads().len(), 6);
        assert_eq!(system_under_test.cuboids()[0].color(), WHITE);
        assert_eq!(system_under_test.cuboids()[1].color(), BLACK);
        assert_eq!(system_under_test.cuboids()[4].color(), BLACK);
    }

    #[test]
    fn test_room_walls_match_corners() {
        let system_under_test = wall(Wall::Front, ROOM_FAR, WHITE, Material::diffuse());

        assert_eq!(system_under_test.origin(), Point::new(1.0, -1.0, 0.0));
        assert_eq!(system_under_test.local_x(), Vector::new(-2.0, 0.0, 0.0));
    }
}
