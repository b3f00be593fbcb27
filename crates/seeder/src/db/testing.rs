//! In-memory connection doubles for seeder and run tests.

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::DbConfig;
use crate::db::{ConnectError, Connector, SeedConnection};
use crate::generators::{GeneratedUser, GeneratedUserRole};

/// Records every call made on it; optionally fails calls whose name starts
/// with `fail_on` (`"begin"`, `"insert"`, `"commit"`, ...).
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingConnection {
    pub fail_on: Option<&'static str>,
    pub calls: Arc<Mutex<Vec<&'static str>>>,
    pub inserted_batches: Arc<Mutex<Vec<usize>>>,
}

impl RecordingConnection {
    /// Fails every insert.
    pub fn failing() -> Self {
        Self::failing_on("insert")
    }

    pub fn failing_on(call: &'static str) -> Self {
        Self {
            fail_on: Some(call),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls().iter().filter(|c| **c == call).count()
    }

    pub fn batches(&self) -> Vec<usize> {
        self.inserted_batches.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) -> Result<(), sqlx::Error> {
        self.calls.lock().unwrap().push(call);
        match self.fail_on {
            Some(prefix) if call.starts_with(prefix) => Err(sqlx::Error::Protocol(format!(
                "{call} failed: insert or update violates foreign key constraint"
            ))),
            _ => Ok(()),
        }
    }

    fn insert(&self, call: &'static str, rows: usize) -> Result<u64, sqlx::Error> {
        self.record(call)?;
        self.inserted_batches.lock().unwrap().push(rows);
        Ok(rows as u64)
    }
}

#[async_trait]
impl SeedConnection for RecordingConnection {
    async fn begin_transaction(&mut self) -> Result<(), sqlx::Error> {
        self.record("begin")
    }

    async fn insert_users(&mut self, users: &[GeneratedUser]) -> Result<u64, sqlx::Error> {
        self.insert("insert_users", users.len())
    }

    async fn insert_user_roles(
        &mut self,
        roles: &[GeneratedUserRole],
    ) -> Result<u64, sqlx::Error> {
        self.insert("insert_user_roles", roles.len())
    }

    async fn commit_transaction(&mut self) -> Result<(), sqlx::Error> {
        self.record("commit")
    }

    async fn rollback_transaction(&mut self) -> Result<(), sqlx::Error> {
        self.record("rollback")
    }

    async fn disconnect(self) -> Result<(), sqlx::Error> {
        self.record("disconnect")
    }
}

/// Hands out a clone of its connection, or fails like an unreachable server.
pub(crate) struct StubConnector {
    pub connection: Option<RecordingConnection>,
}

#[async_trait]
impl Connector for StubConnector {
    type Connection = RecordingConnection;

    async fn connect(&self) -> Result<RecordingConnection, ConnectError> {
        match &self.connection {
            Some(conn) => Ok(conn.clone()),
            None => {
                let config = DbConfig::from_lookup(|_| None).expect("default config");
                Err(ConnectError {
                    host: config.host,
                    port: config.port,
                    database: config.database,
                    source: sqlx::Error::Io(std::io::Error::new(
                        std::io::ErrorKind::ConnectionRefused,
                        "connection refused",
                    )),
                })
            }
        }
    }
}

/// Collects formatted log output for assertions.
#[derive(Debug, Clone, Default)]
pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Routes `tracing` output on the current thread here until the guard drops.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub fn lines_containing(&self, needle: &str) -> usize {
        self.contents().lines().filter(|l| l.contains(needle)).count()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
