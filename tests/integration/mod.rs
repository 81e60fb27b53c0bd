mod basic_integration;
mod legacy_migration;
