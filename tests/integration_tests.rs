use httpmock::prelude::*;
use quake_map::config::toml_config::TomlConfig;
use quake_map::{CliConfig, EtlEngine, LocalStorage, QuakePipeline};
use std::io::Read;
use tempfile::TempDir;

fn earthquake_feed() -> serde_json::Value {
    serde_json::json!({
        "type": "FeatureCollection",
        "metadata": {"generated": 1700000000000i64, "title": "USGS All Earthquakes, Past Week"},
        "features": [
            {
                "type": "Feature",
                "id": "us1",
                "properties": {"mag": 5.2, "place": "South of the Fiji Islands", "time": 1700000000000i64},
                "geometry": {"type": "Point", "coordinates": [178.1, -24.3, 560.0]}
            },
            {
                "type": "Feature",
                "id": "hv2",
                "properties": {"mag": 0.0, "place": "Hawaii"},
                "geometry": {"type": "Point", "coordinates": [-155.2, 19.4, -1.1]}
            },
            {
                "type": "Feature",
                "id": "nc3",
                "properties": {"mag": 2.5, "place": "Northern California"},
                "geometry": {"type": "Point", "coordinates": [-122.8, 38.8, 15.0]}
            }
        ]
    })
}

fn plate_feed() -> serde_json::Value {
    serde_json::json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {"LAYER": "plate boundary", "Name": "PA-NA"},
            "geometry": {"type": "LineString", "coordinates": [[-124.0, 40.0], [-125.0, 41.0]]}
        }]
    })
}

fn cli_config(server: &MockServer, output_path: &str) -> CliConfig {
    CliConfig {
        earthquake_feed: server.url("/all_week.geojson"),
        plates_feed: server.url("/PB2002_boundaries.json"),
        output_path: output_path.to_string(),
        timeout_seconds: 5,
        formats: vec!["geojson".into(), "csv".into(), "html".into()],
        bundle: true,
        center_lat: 20.0,
        center_lon: 0.0,
        zoom: 2,
        config: None,
        verbose: false,
        monitor: false,
        log_json: false,
        dry_run: false,
    }
}

fn read_entry(archive: &mut zip::ZipArchive<std::io::Cursor<Vec<u8>>>, name: &str) -> String {
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

#[tokio::test]
async fn test_end_to_end_bundle() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let quake_mock = server.mock(|when, then| {
        when.method(GET).path("/all_week.geojson");
        then.status(200)
            .header("Content-Type", "application/geo+json")
            .json_body(earthquake_feed());
    });
    let plate_mock = server.mock(|when, then| {
        when.method(GET).path("/PB2002_boundaries.json");
        then.status(200).json_body(plate_feed());
    });

    let config = cli_config(&server, &output_path);
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = QuakePipeline::new(storage, config).unwrap();
    let engine = EtlEngine::new_with_monitoring(pipeline, false);

    let result = engine.run().await.unwrap();

    quake_mock.assert();
    plate_mock.assert();
    assert!(result.ends_with("quake_map.zip"));

    let zip_path = std::path::Path::new(&output_path).join("quake_map.zip");
    let zip_data = std::fs::read(zip_path).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();
    assert_eq!(archive.len(), 6);

    let quakes: serde_json::Value =
        serde_json::from_str(&read_entry(&mut archive, "earthquakes.geojson")).unwrap();
    let features = quakes["features"].as_array().unwrap();
    assert_eq!(features.len(), 3);
    assert_eq!(features[0]["properties"]["style"]["fillColor"], "#ff0000");
    assert_eq!(features[0]["properties"]["style"]["radius"], 5.2 * 4.0);
    assert_eq!(features[1]["properties"]["style"]["fillColor"], "#00ff00");
    assert_eq!(features[1]["properties"]["style"]["radius"], 1.0);
    assert_eq!(features[2]["properties"]["style"]["fillColor"], "#ffff00");
    assert_eq!(features[2]["properties"]["style"]["radius"], 10.0);

    let plates: serde_json::Value =
        serde_json::from_str(&read_entry(&mut archive, "plates.geojson")).unwrap();
    assert_eq!(plates["features"][0]["properties"]["style"]["color"], "orange");

    let map: serde_json::Value =
        serde_json::from_str(&read_entry(&mut archive, "map.json")).unwrap();
    assert_eq!(map["active_base_layer"], "Basemap");
    assert_eq!(map["overlays"][1]["name"], "Tectonic Plates");

    let csv = read_entry(&mut archive, "earthquakes.csv");
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.contains("South of the Fiji Islands"));

    let legend = read_entry(&mut archive, "legend.html");
    assert!(legend.contains("90+ km"));

    let entries: serde_json::Value =
        serde_json::from_str(&read_entry(&mut archive, "legend.json")).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 6);
    assert_eq!(entries[0]["color"], "#00ff00");
    assert_eq!(entries[5]["label"], "90+ km");
}

#[tokio::test]
async fn test_end_to_end_individual_files_without_plates() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/all_week.geojson");
        then.status(200).json_body(earthquake_feed());
    });
    let plate_mock = server.mock(|when, then| {
        when.method(GET).path("/PB2002_boundaries.json");
        then.status(404);
    });

    let mut config = cli_config(&server, &output_path);
    config.bundle = false;
    config.formats = vec!["geojson".into()];

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = QuakePipeline::new(storage, config).unwrap();
    let result = EtlEngine::new(pipeline).run().await.unwrap();

    plate_mock.assert();
    assert_eq!(result, output_path);

    let dir = std::path::Path::new(&output_path);
    assert!(dir.join("earthquakes.geojson").exists());
    assert!(dir.join("map.json").exists());
    assert!(!dir.join("earthquakes.csv").exists());

    let plates: serde_json::Value =
        serde_json::from_slice(&std::fs::read(dir.join("plates.geojson")).unwrap()).unwrap();
    assert!(plates["features"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_end_to_end_earthquake_feed_failure() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/all_week.geojson");
        then.status(200).body("<html>maintenance</html>");
    });
    server.mock(|when, then| {
        when.method(GET).path("/PB2002_boundaries.json");
        then.status(200).json_body(plate_feed());
    });

    let config = cli_config(&server, &output_path);
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = QuakePipeline::new(storage, config).unwrap();

    let err = EtlEngine::new(pipeline).run().await.unwrap_err();
    assert!(matches!(err, quake_map::QuakeError::GeoJsonError(_)));
    assert!(!std::path::Path::new(&output_path).join("quake_map.zip").exists());
}

#[tokio::test]
async fn test_end_to_end_with_toml_config() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("layers");
    let normalized_path = output_path.to_str().unwrap().replace('\\', "/");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/all_week.geojson");
        then.status(200).json_body(earthquake_feed());
    });
    server.mock(|when, then| {
        when.method(GET).path("/PB2002_boundaries.json");
        then.status(200).json_body(plate_feed());
    });

    let toml_content = format!(
        r#"
[feeds]
earthquakes = "{}"
plates = "{}"

[output]
path = "{}"
formats = ["csv"]
bundle = false
"#,
        server.url("/all_week.geojson"),
        server.url("/PB2002_boundaries.json"),
        normalized_path
    );

    let config = TomlConfig::from_toml_str(&toml_content).unwrap();
    let storage = LocalStorage::new(normalized_path.clone());
    let pipeline = QuakePipeline::new(storage, config).unwrap();
    EtlEngine::new(pipeline).run().await.unwrap();

    let csv = std::fs::read_to_string(output_path.join("earthquakes.csv")).unwrap();
    let header = csv.lines().next().unwrap();
    assert_eq!(header, "id,time,place,magnitude,depth,band,fill_color,radius");
    assert!(csv.contains("hv2,,Hawaii,0.0,-1.1,-10\u{2013}10 km,#00ff00,1.0"));
}
