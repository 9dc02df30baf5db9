// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-memory connection recording every executed command.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use table_context::{DbCommand, DbConnection, DbDataReader, DbError, DbParameter, DbValue};

/// One executed command.
#[derive(Debug, Clone, PartialEq)]
pub struct Executed {
    pub text:       String,
    pub parameters: Vec<DbParameter>
}

impl Executed {
    /// Bound value of `name`.
    pub fn parameter(&self, name: &str) -> Option<&DbValue> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }

    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters.iter().map(|p| p.name.as_str()).collect()
    }
}

#[derive(Debug, Default)]
pub struct MemoryConnection {
    executed: Mutex<Vec<Executed>>,
    rows:     Mutex<Vec<Vec<DbValue>>>
}

impl MemoryConnection {
    /// Connection whose next reader yields `rows`.
    pub fn with_rows(rows: Vec<Vec<DbValue>>) -> Self {
        Self {
            executed: Mutex::default(),
            rows:     Mutex::new(rows)
        }
    }

    pub fn executed(&self) -> Vec<Executed> {
        self.executed.lock().unwrap().clone()
    }

    pub fn last(&self) -> Executed {
        self.executed().pop().expect("no command executed")
    }

    fn record(&self, command: &MemoryCommand<'_>) {
        self.executed.lock().unwrap().push(Executed {
            text:       command.text.clone(),
            parameters: command.parameters.clone()
        });
    }
}

impl DbConnection for MemoryConnection {
    fn create_command(&self) -> Box<dyn DbCommand + '_> {
        Box::new(MemoryCommand {
            connection: self,
            text:       String::new(),
            parameters: Vec::new()
        })
    }
}

pub struct MemoryCommand<'c> {
    connection: &'c MemoryConnection,
    text:       String,
    parameters: Vec<DbParameter>
}

#[async_trait]
impl<'c> DbCommand for MemoryCommand<'c> {
    fn command_text(&self) -> &str {
        &self.text
    }

    fn set_command_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn add_parameter(&mut self, parameter: DbParameter) {
        self.parameters.push(parameter);
    }

    fn parameters(&self) -> &[DbParameter] {
        &self.parameters
    }

    async fn execute_non_query(&mut self) -> Result<u64, DbError> {
        self.connection.record(self);
        Ok(1)
    }

    async fn execute_reader<'a>(&'a mut self) -> Result<Box<dyn DbDataReader + 'a>, DbError> {
        self.connection.record(self);
        let rows = std::mem::take(&mut *self.connection.rows.lock().unwrap());
        Ok(Box::new(MemoryReader {
            rows:    rows.into_iter(),
            current: Vec::new()
        }))
    }
}

struct MemoryReader {
    rows:    std::vec::IntoIter<Vec<DbValue>>,
    current: Vec<DbValue>
}

#[async_trait]
impl DbDataReader for MemoryReader {
    async fn read(&mut self) -> Result<bool, DbError> {
        match self.rows.next() {
            Some(row) => {
                self.current = row;
                Ok(true)
            }
            None => Ok(false)
        }
    }

    fn value(&self, ordinal: usize) -> Result<DbValue, DbError> {
        self.current
            .get(ordinal)
            .cloned()
            .ok_or(DbError::OrdinalOutOfRange {
                ordinal
            })
    }
}
