//! Map Resolver Tests
//!
//! Tests verify:
//! - SRID defaulting and validation
//! - Each layer failure kind, with its contextual fields
//! - Layer order, tag merging, zoom ranges and served names
//! - Map-level defaults (bounds, center, tile buffer)

use tileatlas::config::{Config, MAX_ZOOM};
use tileatlas::dict::{Dict, Value};
use tileatlas::document::{MapConfig, MapLayerConfig};
use tileatlas::map::MapResolver;
use tileatlas::projection::{Projection, DEFAULT_SRID, WGS84};
use tileatlas::provider::{ProviderRegistry, ProviderSet};
use tileatlas::AtlasError;

// =============================================================================
// Helper Functions
// =============================================================================

fn providers() -> ProviderSet {
    let roads = Dict::from_iter([
        ("name", Value::from("roads")),
        (
            "default_tags",
            Value::from(Dict::from_iter([("class", "road"), ("source", "osm")])),
        ),
    ]);
    let osm = Dict::from_iter([
        ("name", Value::from("osm")),
        ("type", Value::from("static")),
        (
            "layers",
            Value::from(vec![Value::from("water"), Value::from(roads)]),
        ),
    ]);
    let test = Dict::from_iter([("name", "test"), ("type", "debug")]);

    ProviderRegistry::with_builtins().build(&[test, osm]).unwrap()
}

fn resolve(map: &MapConfig) -> Result<tileatlas::atlas::Map, AtlasError> {
    let providers = providers();
    let config = Config::default();
    MapResolver::new(&providers, &config).resolve(map)
}

// =============================================================================
// Projection Tests
// =============================================================================

#[test]
fn test_empty_map_defaults() {
    let map = resolve(&MapConfig::new("foo")).unwrap();

    assert_eq!(map.name(), "foo");
    assert_eq!(map.srid(), DEFAULT_SRID);
    assert_eq!(map.srid(), 3857);
    assert_eq!(map.projection(), Projection::WebMercator);
    assert!(map.layers().is_empty());
}

#[test]
fn test_alternate_srid() {
    let map = resolve(&MapConfig::new("foo").with_srid(WGS84)).unwrap();
    assert_eq!(map.srid(), 4326);
    assert_eq!(map.projection(), Projection::Wgs84);
}

#[test]
fn test_unsupported_srid() {
    match resolve(&MapConfig::new("foo").with_srid(1234)) {
        Err(AtlasError::UnsupportedTileProjection { code }) => assert_eq!(code, 1234),
        other => panic!("Expected UnsupportedTileProjection, got {:?}", other),
    }
}

#[test]
fn test_unsupported_srid_with_valid_layers() {
    let map = MapConfig::new("foo")
        .with_srid(900913)
        .with_layer(MapLayerConfig::new("osm.roads"));
    assert!(matches!(
        resolve(&map),
        Err(AtlasError::UnsupportedTileProjection { code: 900913 })
    ));
}

// =============================================================================
// Layer Failure Tests
// =============================================================================

#[test]
fn test_invalid_reference() {
    let map = MapConfig::new("foo").with_layer(MapLayerConfig::new("bar"));
    match resolve(&map) {
        Err(AtlasError::ProviderLayerInvalid { reference, map }) => {
            assert_eq!(reference, "bar");
            assert_eq!(map, "foo");
        }
        other => panic!("Expected ProviderLayerInvalid, got {:?}", other),
    }
}

#[test]
fn test_invalid_reference_even_if_provider_name_matches() {
    // "test" exists, but "test" alone is not a reference
    let map = MapConfig::new("foo").with_layer(MapLayerConfig::new("test"));
    assert!(matches!(
        resolve(&map),
        Err(AtlasError::ProviderLayerInvalid { .. })
    ));
}

#[test]
fn test_provider_not_found() {
    let map = MapConfig::new("foo").with_layer(MapLayerConfig::new("bar.baz"));
    match resolve(&map) {
        Err(AtlasError::ProviderNotFound { provider }) => assert_eq!(provider, "bar"),
        other => panic!("Expected ProviderNotFound, got {:?}", other),
    }
}

#[test]
fn test_layer_not_registered() {
    let map = MapConfig::new("foo").with_layer(MapLayerConfig::new("test.bar"));
    match resolve(&map) {
        Err(AtlasError::ProviderLayerNotRegistered {
            map,
            provider_layer,
            provider,
        }) => {
            assert_eq!(map, "foo");
            assert_eq!(provider_layer, "test.bar");
            assert_eq!(provider, "test");
        }
        other => panic!("Expected ProviderLayerNotRegistered, got {:?}", other),
    }
}

#[test]
fn test_default_tags_invalid() {
    let map = MapConfig::new("foo")
        .with_layer(MapLayerConfig::new("test.debug-tile-outline").with_default_tags(false));
    match resolve(&map) {
        Err(AtlasError::DefaultTagsInvalid { provider_layer }) => {
            assert_eq!(provider_layer, "test.debug-tile-outline");
        }
        other => panic!("Expected DefaultTagsInvalid, got {:?}", other),
    }
}

#[test]
fn test_first_failing_layer_wins() {
    let map = MapConfig::new("foo")
        .with_layer(MapLayerConfig::new("osm.roads"))
        .with_layer(MapLayerConfig::new("nope.roads"))
        .with_layer(MapLayerConfig::new("bad"));
    assert!(matches!(
        resolve(&map),
        Err(AtlasError::ProviderNotFound { provider }) if provider == "nope"
    ));
}

// =============================================================================
// Successful Resolution Tests
// =============================================================================

#[test]
fn test_layers_keep_order() {
    let map = MapConfig::new("streets")
        .with_layer(MapLayerConfig::new("osm.water"))
        .with_layer(MapLayerConfig::new("test.debug-tile-outline"))
        .with_layer(MapLayerConfig::new("osm.roads"));

    let resolved = resolve(&map).unwrap();
    let names: Vec<&str> = resolved.layers().iter().map(|l| l.name()).collect();
    assert_eq!(names, vec!["water", "debug-tile-outline", "roads"]);

    let roads = &resolved.layers()[2];
    assert_eq!(roads.provider(), "osm");
    assert_eq!(roads.provider_layer(), "roads");
    assert_eq!(roads.reference(), "osm.roads");
}

#[test]
fn test_tags_merged_with_overrides() {
    let overrides = Dict::from_iter([("class", "highway"), ("layer", "top")]);
    let map = MapConfig::new("streets")
        .with_layer(MapLayerConfig::new("osm.roads").with_default_tags(overrides));

    let resolved = resolve(&map).unwrap();
    let tags = resolved.layers()[0].default_tags();
    assert_eq!(tags.string("class").unwrap(), "highway");
    assert_eq!(tags.string("source").unwrap(), "osm");
    assert_eq!(tags.string("layer").unwrap(), "top");
}

#[test]
fn test_null_tags_keep_provider_tags() {
    let map = MapConfig::new("streets")
        .with_layer(MapLayerConfig::new("osm.roads").with_default_tags(Value::Null));
    let resolved = resolve(&map).unwrap();
    assert_eq!(resolved.layers()[0].default_tags().len(), 2);
}

#[test]
fn test_zoom_defaults() {
    let map = MapConfig::new("streets").with_layer(MapLayerConfig::new("osm.roads"));
    let resolved = resolve(&map).unwrap();
    let layer = &resolved.layers()[0];
    assert_eq!(layer.min_zoom(), 0);
    assert_eq!(layer.max_zoom(), MAX_ZOOM);
}

#[test]
fn test_layers_at_zoom() {
    let map = MapConfig::new("streets")
        .with_layer(MapLayerConfig::new("osm.water").with_zoom(0, 5))
        .with_layer(MapLayerConfig::new("osm.roads").with_zoom(6, 14));
    let resolved = resolve(&map).unwrap();

    let at = |z| -> Vec<String> {
        resolved
            .layers_at_zoom(z)
            .map(|l| l.name().to_string())
            .collect()
    };
    assert_eq!(at(3), vec!["water"]);
    assert_eq!(at(6), vec!["roads"]);
    assert!(at(20).is_empty());
}

#[test]
fn test_inverted_zoom_range() {
    let map = MapConfig::new("streets").with_layer(MapLayerConfig::new("osm.roads").with_zoom(10, 4));
    match resolve(&map) {
        Err(AtlasError::InvalidZoomRange {
            map,
            provider_layer,
            min_zoom,
            max_zoom,
        }) => {
            assert_eq!(map, "streets");
            assert_eq!(provider_layer, "osm.roads");
            assert_eq!((min_zoom, max_zoom), (10, 4));
        }
        other => panic!("Expected InvalidZoomRange, got {:?}", other),
    }
}

#[test]
fn test_zoom_above_max() {
    let map = MapConfig::new("streets").with_layer(MapLayerConfig::new("osm.roads").with_zoom(0, 30));
    assert!(matches!(
        resolve(&map),
        Err(AtlasError::InvalidZoomRange { max_zoom: 30, .. })
    ));
}

#[test]
fn test_configured_max_zoom() {
    let providers = providers();
    let config = Config::builder().max_zoom(14).build();
    let resolver = MapResolver::new(&providers, &config);

    let defaulted = resolver
        .resolve(&MapConfig::new("a").with_layer(MapLayerConfig::new("osm.roads")))
        .unwrap();
    assert_eq!(defaulted.layers()[0].max_zoom(), 14);

    let too_high = resolver.resolve(
        &MapConfig::new("b").with_layer(MapLayerConfig::new("osm.roads").with_zoom(0, 16)),
    );
    assert!(matches!(too_high, Err(AtlasError::InvalidZoomRange { .. })));
}

#[test]
fn test_layer_name_override() {
    let map = MapConfig::new("streets")
        .with_layer(MapLayerConfig::new("osm.roads").with_name("transportation"));
    let resolved = resolve(&map).unwrap();
    assert_eq!(resolved.layers()[0].name(), "transportation");
    assert_eq!(resolved.layers()[0].provider_layer(), "roads");
}

#[test]
fn test_same_name_disjoint_zooms_allowed() {
    let map = MapConfig::new("streets")
        .with_layer(MapLayerConfig::new("osm.water").with_name("base").with_zoom(0, 8))
        .with_layer(MapLayerConfig::new("osm.roads").with_name("base").with_zoom(9, 22));
    assert_eq!(resolve(&map).unwrap().layers().len(), 2);
}

#[test]
fn test_same_name_overlapping_zooms_rejected() {
    let map = MapConfig::new("streets")
        .with_layer(MapLayerConfig::new("osm.water").with_name("base").with_zoom(0, 10))
        .with_layer(MapLayerConfig::new("osm.roads").with_name("base").with_zoom(10, 22));
    match resolve(&map) {
        Err(AtlasError::LayerNameConflict { map, layer }) => {
            assert_eq!(map, "streets");
            assert_eq!(layer, "base");
        }
        other => panic!("Expected LayerNameConflict, got {:?}", other),
    }
}

// =============================================================================
// Map Defaults Tests
// =============================================================================

#[test]
fn test_map_level_defaults() {
    let map = resolve(&MapConfig::new("foo")).unwrap();
    assert_eq!(map.bounds(), [-180.0, -85.0511, 180.0, 85.0511]);
    assert_eq!(map.center(), [0.0, 0.0, 1.0]);
    assert_eq!(map.tile_buffer(), 64);
    assert_eq!(map.attribution(), None);
}

#[test]
fn test_map_level_values_pass_through() {
    let config = MapConfig::new("foo")
        .with_attribution("© contributors")
        .with_bounds([0.0, 40.0, 10.0, 50.0])
        .with_tile_buffer(12);
    let map = resolve(&config).unwrap();

    assert_eq!(map.attribution(), Some("© contributors"));
    assert_eq!(map.bounds(), [0.0, 40.0, 10.0, 50.0]);
    assert_eq!(map.center(), [5.0, 45.0, 1.0]);
    assert_eq!(map.tile_buffer(), 12);
}

#[test]
fn test_render_hints_pass_through() {
    let mut layer = MapLayerConfig::new("osm.roads");
    layer.dont_clip = true;
    layer.dont_simplify = true;
    let resolved = resolve(&MapConfig::new("foo").with_layer(layer)).unwrap();

    let layer = &resolved.layers()[0];
    assert!(layer.dont_clip());
    assert!(layer.dont_simplify());
    assert!(!layer.dont_clean());
}
