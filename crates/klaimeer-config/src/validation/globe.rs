//! Globe validation: camera frustum, layer geometry and materials, animation.

use crate::schema::KlaimeerConfig;

use super::helpers::{validate_hex_color, validate_positive, validate_range, validate_range_f64};

pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &KlaimeerConfig) {
    let camera = &config.globe.camera;
    validate_range_f64(errors, "globe.camera.fov_degrees", camera.fov_degrees, 1.0, 179.0);
    validate_positive(errors, "globe.camera.near", camera.near);
    validate_positive(errors, "globe.camera.distance", camera.distance);
    if camera.far.is_nan() || camera.far <= camera.near {
        errors.push(format!(
            "globe.camera.far = {} must be greater than globe.camera.near = {}",
            camera.far, camera.near
        ));
    }
}

pub(crate) fn validate_layers(errors: &mut Vec<String>, config: &KlaimeerConfig) {
    let globe = &config.globe;

    validate_positive(errors, "globe.sphere.radius", globe.sphere.radius);
    validate_range(
        errors,
        "globe.sphere.width_segments",
        globe.sphere.width_segments,
        3,
        512,
    );
    validate_range(
        errors,
        "globe.sphere.height_segments",
        globe.sphere.height_segments,
        2,
        512,
    );
    validate_range_f64(errors, "globe.sphere.opacity", globe.sphere.opacity, 0.0, 1.0);

    validate_hex_color(errors, "globe.wireframe.color", &globe.wireframe.color);
    validate_range_f64(
        errors,
        "globe.wireframe.opacity",
        globe.wireframe.opacity,
        0.0,
        1.0,
    );

    validate_range(errors, "globe.points.count", globe.points.count, 0, 100_000);
    validate_positive(errors, "globe.points.radius", globe.points.radius);
    validate_positive(errors, "globe.points.size", globe.points.size);
    validate_hex_color(errors, "globe.points.color", &globe.points.color);
    validate_range_f64(errors, "globe.points.opacity", globe.points.opacity, 0.0, 1.0);
}

pub(crate) fn validate_animation(errors: &mut Vec<String>, config: &KlaimeerConfig) {
    let anim = &config.globe.animation;
    validate_range_f64(errors, "globe.animation.time_step", anim.time_step, 0.0, 1.0);
    validate_range_f64(
        errors,
        "globe.animation.sphere_spin",
        anim.sphere_spin,
        -1.0,
        1.0,
    );
    validate_range_f64(
        errors,
        "globe.animation.points_spin",
        anim.points_spin,
        -1.0,
        1.0,
    );
}
