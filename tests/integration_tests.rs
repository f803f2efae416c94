use serde::Deserialize;
use serde_ilcf::{
    from_reader, from_str, ilcf_map, parse_reader, parse_str, Error, IlcfMap, LineKind, Parser,
};
use std::collections::HashMap;
use std::io::Cursor;

const SERVICE_CONFIG: &str = "\
# service configuration
name = billing
version = 3

server
\thost = 0.0.0.0     # listen everywhere
\tport = 8443
\ttls
\t\tenabled = true
\t\tcert = /etc/billing/cert.pem
\ttimeout = 2.5

database
\turl = postgres://db/billing?sslmode=require
\tpool
\t\tmax_size = 16
\t\tmin_size = 2

owner = team\\#42
";

#[derive(Deserialize, Debug, PartialEq)]
struct Tls {
    enabled: bool,
    cert: String,
}

#[derive(Deserialize, Debug, PartialEq)]
struct Server {
    host: String,
    port: u16,
    tls: Tls,
    timeout: f64,
}

#[derive(Deserialize, Debug, PartialEq)]
struct Pool {
    max_size: u32,
    min_size: u32,
}

#[derive(Deserialize, Debug, PartialEq)]
struct Database {
    url: String,
    pool: Pool,
}

#[derive(Deserialize, Debug, PartialEq)]
struct ServiceConfig {
    name: String,
    version: u8,
    server: Server,
    database: Database,
    owner: String,
    region: Option<String>,
}

#[test]
fn test_full_document_keys() {
    let map = parse_str(SERVICE_CONFIG).unwrap();
    println!("Parsed: {:?}", map);

    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "name",
            "version",
            "server_host",
            "server_port",
            "server_tls_enabled",
            "server_tls_cert",
            "server_timeout",
            "database_url",
            "database_pool_max_size",
            "database_pool_min_size",
            "owner",
        ]
    );
}

#[test]
fn test_full_document_values() {
    let map = parse_str(SERVICE_CONFIG).unwrap();

    assert_eq!(map.get_str("server_host").unwrap(), "0.0.0.0");
    assert_eq!(map.get_i32("server_port").unwrap(), 8443);
    assert!(map.get_bool("server_tls_enabled").unwrap());
    assert_eq!(map.get_f64("server_timeout").unwrap(), 2.5);
    assert_eq!(
        map.get_str("database_url").unwrap(),
        "postgres://db/billing?sslmode=require"
    );
    assert_eq!(map.get_i64("database_pool_max_size").unwrap(), 16);
    assert_eq!(map.get_str("owner").unwrap(), "team#42");
}

#[test]
fn test_labels_store_nothing() {
    let map = parse_str(SERVICE_CONFIG).unwrap();
    for label in ["server", "server_tls", "database", "database_pool"] {
        assert!(map.get(label).unwrap_err().is_not_found(), "{}", label);
    }
}

#[test]
fn test_deserialize_full_document() {
    let config: ServiceConfig = from_str(SERVICE_CONFIG).unwrap();
    assert_eq!(
        config,
        ServiceConfig {
            name: "billing".to_string(),
            version: 3,
            server: Server {
                host: "0.0.0.0".to_string(),
                port: 8443,
                tls: Tls {
                    enabled: true,
                    cert: "/etc/billing/cert.pem".to_string(),
                },
                timeout: 2.5,
            },
            database: Database {
                url: "postgres://db/billing?sslmode=require".to_string(),
                pool: Pool {
                    max_size: 16,
                    min_size: 2,
                },
            },
            owner: "team#42".to_string(),
            region: None,
        }
    );
}

#[test]
fn test_reader_and_str_agree() {
    let from_text = parse_str(SERVICE_CONFIG).unwrap();
    let from_stream = parse_reader(Cursor::new(SERVICE_CONFIG.as_bytes())).unwrap();
    assert_eq!(from_text, from_stream);

    let config: ServiceConfig = from_reader(Cursor::new(SERVICE_CONFIG.as_bytes())).unwrap();
    assert_eq!(config.server.port, 8443);
}

#[test]
fn test_missing_key_is_error_not_placeholder() {
    let map = parse_str("a = 1").unwrap();
    assert_eq!(map.get("b"), Err(Error::KeyNotFound("b".to_string())));
    assert_eq!(map.get_i32("b"), Err(Error::KeyNotFound("b".to_string())));
}

#[test]
fn test_typed_conversion_failures() {
    let map = parse_str("port = http\nflag = yes\ninitial = ab").unwrap();

    assert!(matches!(map.get_i32("port"), Err(Error::Conversion { .. })));
    assert!(matches!(map.get_f64("port"), Err(Error::Conversion { .. })));
    assert!(matches!(map.get_bool("flag"), Err(Error::Conversion { .. })));
    assert!(matches!(map.get_char("initial"), Err(Error::Conversion { .. })));
}

#[test]
fn test_datetime_and_bigint() {
    let map = parse_str(
        "created = 2024-01-15T10:30:00Z\nbig = 123456789012345678901234567890\nbad = soon",
    )
    .unwrap();

    let created = map.get_datetime("created").unwrap();
    assert_eq!(created.to_rfc3339(), "2024-01-15T10:30:00+00:00");
    assert_eq!(
        map.get_bigint("big").unwrap().to_string(),
        "123456789012345678901234567890"
    );
    assert!(matches!(map.get_datetime("bad"), Err(Error::Conversion { .. })));
}

#[test]
fn test_parser_line_kinds() {
    let mut parser = Parser::new();
    let kinds: Vec<LineKind> = [
        "",
        "# heading",
        "list",
        "\t- one",
        "\t* k = v",
        "\titem = 1",
    ]
    .iter()
    .map(|line| parser.process_line(line).unwrap())
    .collect();

    assert_eq!(
        kinds,
        vec![
            LineKind::Blank,
            LineKind::Comment,
            LineKind::Label {
                key: "list".to_string()
            },
            LineKind::SequenceElement,
            LineKind::BlockElement,
            LineKind::Assignment {
                key: "list_item".to_string()
            },
        ]
    );
}

#[test]
fn test_indentation_error_reports_line() {
    let text = "a = 1\n\n\tb = 2\n\t\t\t\tc = 3";
    match parse_str(text) {
        Err(Error::Indentation {
            line,
            found,
            max,
            context,
        }) => {
            assert_eq!(line, 4);
            assert_eq!(found, 4);
            assert_eq!(max, 2);
            assert_eq!(context, "\t\t\t\tc = 3");
        }
        other => panic!("Expected indentation error, got {:?}", other),
    }
}

#[test]
fn test_serialize_map_to_json() {
    let map = parse_str("a = 1\n\tb = two").unwrap();
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"a":"1","a_b":"two"}"#);
}

#[test]
fn test_into_hashmap() {
    let map = parse_str("x = 1\ny = 2").unwrap();
    let hash: HashMap<String, String> = map.into();
    assert_eq!(hash.len(), 2);
    assert_eq!(hash["y"], "2");
}

#[test]
fn test_collect_into_map() {
    let map: IlcfMap = vec![("k".to_string(), "v".to_string())]
        .into_iter()
        .collect();
    assert_eq!(map, ilcf_map! { "k" => "v" });
}
