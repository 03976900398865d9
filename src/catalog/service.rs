//! Running-service model and the database catalog filter
//!
//! Services are deserialized straight from the environment's JSON report
//! (`lando info --format json`). The model keeps only the fields the
//! pipeline reads; everything else in the report is ignored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Service types that can be opened in a database GUI client
pub const DB_TYPES: [&str; 4] = ["mysql", "mariadb", "postgres", "mssql"];

/// A running service exposed by the local development environment
///
/// Immutable snapshot; the pipeline never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    /// Service name as reported by the environment (e.g. "database")
    #[serde(rename = "service")]
    pub name: String,

    /// Service type ("mysql", "postgres", "php", ...); empty when the
    /// environment reports none
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Service version string (e.g. "8.0.30")
    #[serde(default)]
    pub version: String,

    /// Host/port reachable from the host machine, when exposed
    #[serde(default)]
    pub external_connection: Option<Endpoint>,

    /// Connection credentials, when the service has any
    #[serde(default)]
    pub creds: Credentials,
}

impl Service {
    /// Whether this service is database-capable and reachable: a supported
    /// database type with a numeric external port.
    pub fn is_database(&self) -> bool {
        DB_TYPES.contains(&self.kind.as_str()) && self.dialable_port().is_some()
    }

    /// The external port, if present and numeric
    pub fn dialable_port(&self) -> Option<&Port> {
        self.external_connection
            .as_ref()
            .and_then(|endpoint| endpoint.port.as_ref())
            .filter(|port| port.is_numeric())
    }
}

/// Network endpoint reachable from the host machine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoint {
    /// Reported host, often a bind-all address like "0.0.0.0"
    #[serde(default)]
    pub host: String,

    /// Reported port; environments emit numbers, strings, or null
    #[serde(default)]
    pub port: Option<Port>,
}

/// Connection credentials for a database service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub user: String,
    pub password: String,
    pub database: String,
}

/// A reported port value, preserved in whichever form the environment used
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Port {
    Number(u32),
    Text(String),
}

impl Port {
    /// Whether the value parses as a finite number
    ///
    /// Accepts integer-looking and float-looking strings, with surrounding
    /// whitespace. Rejects empty, non-numeric, and NaN/infinite values.
    pub fn is_numeric(&self) -> bool {
        match self {
            Port::Number(_) => true,
            Port::Text(text) => {
                let trimmed = text.trim();
                !trimmed.is_empty() && trimmed.parse::<f64>().is_ok_and(f64::is_finite)
            }
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Port::Number(n) => write!(f, "{}", n),
            Port::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Keep only database services with a dialable external port
///
/// Original relative ordering is preserved; the first survivor is the
/// default candidate downstream. Returns an empty vector when nothing
/// matches, which is not an error here.
pub fn filter_db_services(services: Vec<Service>) -> Vec<Service> {
    services.into_iter().filter(Service::is_database).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(name: &str, kind: &str, port: Option<Port>) -> Service {
        Service {
            name: name.to_string(),
            kind: kind.to_string(),
            version: String::new(),
            external_connection: Some(Endpoint {
                host: "0.0.0.0".to_string(),
                port,
            }),
            creds: Credentials::default(),
        }
    }

    #[test]
    fn test_filter_keeps_supported_types_with_numeric_port() {
        let services = vec![
            service("database", "mysql", Some(Port::Text("3306".to_string()))),
            service("pg", "postgres", Some(Port::Number(5432))),
            service("maria", "mariadb", Some(Port::Text("3307".to_string()))),
            service("sql", "mssql", Some(Port::Text("1433".to_string()))),
        ];

        let kept = filter_db_services(services);
        assert_eq!(kept.len(), 4);
    }

    #[test]
    fn test_filter_excludes_unsupported_types() {
        let services = vec![
            service("appserver", "php", Some(Port::Text("80".to_string()))),
            service("cache", "redis", Some(Port::Text("6379".to_string()))),
            service("database", "mysql", Some(Port::Text("3306".to_string()))),
        ];

        let kept = filter_db_services(services);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "database");
    }

    #[test]
    fn test_filter_excludes_non_numeric_and_absent_ports() {
        let services = vec![
            service("a", "mysql", Some(Port::Text("not-a-port".to_string()))),
            service("b", "mysql", Some(Port::Text(String::new()))),
            service("c", "mysql", None),
            Service {
                external_connection: None,
                ..service("d", "mysql", None)
            },
        ];

        assert!(filter_db_services(services).is_empty());
    }

    #[test]
    fn test_filter_excludes_untyped_services() {
        // Some containers report no type at all
        let services = vec![service("mystery", "", Some(Port::Text("3306".to_string())))];
        assert!(filter_db_services(services).is_empty());
    }

    #[test]
    fn test_filter_preserves_order() {
        let services = vec![
            service("one", "mysql", Some(Port::Number(3306))),
            service("skipped", "php", Some(Port::Number(80))),
            service("two", "postgres", Some(Port::Number(5432))),
            service("three", "mariadb", Some(Port::Number(3307))),
        ];

        let names: Vec<String> = filter_db_services(services)
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_port_accepts_integer_and_float_strings() {
        assert!(Port::Text("3306".to_string()).is_numeric());
        assert!(Port::Text("5432.5".to_string()).is_numeric());
        assert!(Port::Text(" 3306 ".to_string()).is_numeric());
        assert!(Port::Number(3306).is_numeric());
    }

    #[test]
    fn test_port_rejects_non_numeric_values() {
        assert!(!Port::Text("abc".to_string()).is_numeric());
        assert!(!Port::Text(String::new()).is_numeric());
        assert!(!Port::Text("   ".to_string()).is_numeric());
        assert!(!Port::Text("NaN".to_string()).is_numeric());
        assert!(!Port::Text("inf".to_string()).is_numeric());
        assert!(!Port::Text("3306th".to_string()).is_numeric());
    }

    #[test]
    fn test_port_display_preserves_reported_form() {
        assert_eq!(Port::Number(5432).to_string(), "5432");
        assert_eq!(Port::Text("3306".to_string()).to_string(), "3306");
    }

    #[test]
    fn test_service_deserializes_from_environment_json() {
        let json = r#"{
            "service": "database",
            "urls": [],
            "type": "mysql",
            "healthy": true,
            "version": "8.0.30",
            "meUser": "www-data",
            "creds": {"database": "lamp", "password": "lamp", "user": "lamp"},
            "internal_connection": {"host": "database", "port": "3306"},
            "external_connection": {"host": "0.0.0.0", "port": "49731"}
        }"#;

        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.name, "database");
        assert_eq!(service.kind, "mysql");
        assert_eq!(service.version, "8.0.30");
        assert_eq!(service.creds.database, "lamp");
        assert!(service.is_database());
    }

    #[test]
    fn test_service_deserializes_with_missing_fields() {
        // Non-database containers often omit creds and external_connection
        let json = r#"{"service": "appserver", "type": "php"}"#;

        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.name, "appserver");
        assert!(service.external_connection.is_none());
        assert!(service.creds.user.is_empty());
        assert!(!service.is_database());
    }

    #[test]
    fn test_service_deserializes_null_and_numeric_ports() {
        let null_port: Service = serde_json::from_str(
            r#"{"service": "a", "type": "mysql", "external_connection": {"host": "0.0.0.0", "port": null}}"#,
        )
        .unwrap();
        assert!(!null_port.is_database());

        let numeric_port: Service = serde_json::from_str(
            r#"{"service": "b", "type": "mysql", "external_connection": {"host": "0.0.0.0", "port": 3306}}"#,
        )
        .unwrap();
        assert!(numeric_port.is_database());
    }
}
