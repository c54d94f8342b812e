//! # Runtime Tests
//!
//! Frame loop behavior against the staging runtime.

use super::*;
use crate::animation::RadialPulseAnimator;
use crate::material::{Color, InMemoryTextures, Material};
use crate::primitives::{build_box, build_sphere};

fn pulsing_loop(around: u32, down: u32) -> FrameLoop<StagingRuntime> {
    let sphere = build_sphere(around, down).unwrap();
    let animator = RadialPulseAnimator::new(&sphere, around).unwrap();
    let mut frames = FrameLoop::new(StagingRuntime::default());
    frames.spawn_animated(&sphere, animator, &Instance::default());
    frames
}

#[test]
fn test_spawn_uploads_static_geometry() {
    let mut frames = FrameLoop::new(StagingRuntime::default());
    let material = Material::solid(Color::from_hex(0x8844aa));
    let handle = *frames.spawn(&build_box(), &Instance::new(material.clone(), -2.0));

    let geometry = frames.runtime().geometry(handle).unwrap();
    assert_eq!(geometry.positions.len(), 72);
    assert_eq!(geometry.indices.len(), 36);
    assert_eq!(geometry.uvs.as_ref().map(Vec::len), Some(48));
    assert_eq!(geometry.instance.material, material);
    assert_eq!(geometry.instance.offset_x, -2.0);
    assert_eq!(frames.static_handles(), &[handle]);
}

#[test]
fn test_tick_converts_milliseconds() {
    let mut frames = pulsing_loop(4, 2);
    assert_eq!(frames.tick(0.0), 0.0);
    assert_eq!(frames.tick(250.0), 0.25);
    assert_eq!(frames.tick(2000.0), 2.0);
    assert_eq!(frames.frame_count(), 3);
}

#[test]
fn test_tick_uploads_positions_once_per_frame() {
    let mut frames = pulsing_loop(8, 4);
    let (&handle, _) = frames.animated().next().unwrap();
    assert_eq!(frames.runtime().geometry(handle).unwrap().revisions, 0);

    for frame in 1..=5u64 {
        frames.tick(frame as f64 * 16.0);
        assert_eq!(frames.runtime().geometry(handle).unwrap().revisions, frame);
    }
}

#[test]
fn test_uploaded_positions_match_animator() {
    let mut frames = pulsing_loop(8, 4);
    frames.tick(1234.0);

    let (&handle, animator) = frames.animated().next().unwrap();
    let uploaded = &frames.runtime().geometry(handle).unwrap().positions;
    assert_eq!(uploaded.as_slice(), animator.positions());
    assert!(!animator.buffer().is_dirty());
}

#[test]
fn test_tick_matches_direct_advance() {
    let mut frames = pulsing_loop(6, 3);
    frames.tick(1500.0);

    let sphere = build_sphere(6, 3).unwrap();
    let mut direct = RadialPulseAnimator::new(&sphere, 6).unwrap();
    direct.advance(1.5);

    let (_, animator) = frames.animated().next().unwrap();
    assert_eq!(animator.positions(), direct.positions());
}

#[test]
fn test_tick_advances_every_animated_sphere() {
    let mut frames = pulsing_loop(8, 4);
    let sphere = build_sphere(6, 3).unwrap();
    let animator = RadialPulseAnimator::new(&sphere, 6).unwrap();
    frames.spawn_animated(&sphere, animator, &Instance::default());

    frames.tick(1500.0);
    frames.tick(1516.0);

    let handles: Vec<GeometryHandle> = frames.animated().map(|(&handle, _)| handle).collect();
    assert_eq!(handles, [GeometryHandle(0), GeometryHandle(1)]);
    for (&handle, animator) in frames.animated() {
        let geometry = frames.runtime().geometry(handle).unwrap();
        assert_eq!(geometry.revisions, 2);
        assert_eq!(geometry.positions.as_slice(), animator.positions());
    }
}

#[test]
fn test_tick_without_animation_only_counts() {
    let mut frames = FrameLoop::new(StagingRuntime::default());
    frames.spawn(&build_box(), &Instance::default());
    frames.tick(16.0);
    assert_eq!(frames.frame_count(), 1);
    assert_eq!(frames.runtime().geometry(GeometryHandle(0)).unwrap().revisions, 0);
}

#[test]
fn test_scene_with_fallback_texture_keeps_rendering() {
    let mut textures = InMemoryTextures::default();
    textures.register("checker.png");

    let mut frames = pulsing_loop(4, 2);
    let textured = Material::with_texture(Color::WHITE, &textures, "checker.png");
    let fallback = Material::with_texture(Color::from_hex(0xaa8844), &textures, "missing.png");
    frames.spawn(&build_box(), &Instance::new(textured, -2.0));
    frames.spawn(&build_box(), &Instance::new(fallback, 2.0));

    frames.tick(100.0);
    let runtime = frames.into_runtime();
    assert_eq!(runtime.len(), 3);
    assert!(runtime.geometry(GeometryHandle(1)).unwrap().instance.material.is_textured());
    assert!(!runtime.geometry(GeometryHandle(2)).unwrap().instance.material.is_textured());
}

#[test]
fn test_update_for_unknown_handle_is_ignored() {
    let mut runtime = StagingRuntime::default();
    runtime.update_positions(&GeometryHandle(7), &[1.0, 2.0, 3.0]);
    assert!(runtime.is_empty());
}
