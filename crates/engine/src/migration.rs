// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Migration wrapper: adapts a loaded script to a uniform `run(reverse)`
//! contract executed through the task bus.

use crate::bus::{StepOutcome, TaskBus};
use crate::client::RemoteClient;
use evo_script::MigrationDefinition;
use std::sync::Arc;

pub struct Migration {
    name: String,
    definition: MigrationDefinition,
    client: Arc<dyn RemoteClient>,
}

impl Migration {
    pub fn new(
        name: impl Into<String>,
        definition: MigrationDefinition,
        client: Arc<dyn RemoteClient>,
    ) -> Self {
        Self {
            name: name.into(),
            definition,
            client,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the forward (or reverse) operation through the bus.
    ///
    /// A script without an operation for the requested direction resolves
    /// immediately as [`StepOutcome::Skipped`]; that is a deliberate no-op,
    /// not an error. Otherwise the actions are scheduled as one bus task
    /// and this resolves when the task signals completion.
    pub async fn run(&self, bus: &TaskBus, reverse: bool) -> StepOutcome {
        let Some(actions) = self.definition.actions(reverse) else {
            tracing::debug!(name = %self.name, reverse, "no operation defined, skipping");
            return StepOutcome::Skipped;
        };

        let actions = actions.to_vec();
        let client = Arc::clone(&self.client);
        let name = self.name.clone();
        bus.run(async move {
            for action in &actions {
                tracing::debug!(migration = %name, action = %action.action, "executing action");
                if let Err(e) = client.execute(&name, action).await {
                    return StepOutcome::Failed(e.to_string());
                }
            }
            StepOutcome::Completed
        })
        .await
    }
}

#[cfg(test)]
#[path = "migration_tests.rs"]
mod tests;
