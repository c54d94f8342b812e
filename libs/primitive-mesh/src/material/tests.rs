use super::*;

#[test]
fn hex_round_trip_preserves_channels() {
    let color = Color::from_hex(0x8844aa);
    assert_eq!(color.to_hex(), 0x8844aa);
    assert!((color.r - 0x88 as f32 / 255.0).abs() < 1e-6);
    assert_eq!(Color::from_hex(0x000000), Color::BLACK);
    assert_eq!(Color::from_hex(0xffffff), Color::WHITE);
}

#[test]
fn to_hex_clamps_out_of_range_components() {
    assert_eq!(Color::rgb(2.0, -1.0, 0.0).to_hex(), 0xff0000);
}

#[test]
fn register_is_stable_per_path() {
    let mut textures = InMemoryTextures::default();
    let first = textures.register("a.png");
    let second = textures.register("b.png");
    assert_ne!(first, second);
    assert_eq!(textures.register("a.png"), first);
}

#[test]
fn textured_material_resolves_handle() {
    let mut textures = InMemoryTextures::default();
    let id = textures.register("wall.jpg");

    let material = Material::with_texture(Color::from_hex(0x44aa88), &textures, "wall.jpg");
    assert!(material.is_textured());
    assert_eq!(
        material.texture,
        Some(TextureRef {
            id,
            path: "wall.jpg".into()
        })
    );
}

#[test]
fn missing_texture_falls_back_to_flat_color() {
    let textures = InMemoryTextures::default();
    let color = Color::from_hex(0xaa8844);

    let material = Material::with_texture(color, &textures, "missing.jpg");
    assert!(!material.is_textured());
    assert_eq!(material, Material::solid(color));
}

#[test]
fn load_error_names_the_path() {
    let err = InMemoryTextures::default().load("nope.png").unwrap_err();
    assert_eq!(err.to_string(), "texture not found: nope.png");
}
