//! Server configuration, from command-line flags with environment fallbacks.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::model::ZeroMarks;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Student record service: JSON file storage with a CRUD HTTP API.
#[derive(Debug, Clone, Parser)]
#[command(name = "student_records", version, about, long_about = None)]
pub struct ServerConfig {
    /// Address to bind.
    #[arg(long, env = "STUDENTS_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(short, long, env = "STUDENTS_PORT", default_value_t = 3000)]
    pub port: u16,

    /// JSON file holding the records. Created on first read if missing.
    #[arg(long, env = "STUDENTS_DATA_FILE", default_value = "students.json")]
    pub data_file: PathBuf,

    /// Directory holding index.html, style.css and script.js.
    #[arg(long, env = "STUDENTS_STATIC_DIR", default_value = ".")]
    pub static_dir: PathBuf,

    /// Accept `marks: 0` on create instead of rejecting it as missing.
    #[arg(long, env = "STUDENTS_ACCEPT_ZERO_MARKS")]
    pub accept_zero_marks: bool,

    /// Log output format.
    #[arg(long, env = "STUDENTS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            data_file: PathBuf::from("students.json"),
            static_dir: PathBuf::from("."),
            accept_zero_marks: false,
            log_format: LogFormat::Pretty,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn zero_marks(&self) -> ZeroMarks {
        if self.accept_zero_marks {
            ZeroMarks::Accept
        } else {
            ZeroMarks::Reject
        }
    }
}
