//! Snapshot store database schema.

/// SQL to create the snapshots table.
pub const CREATE_SNAPSHOTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS campaign_snapshots (
    campaign_id UUID NOT NULL,
    system_id   VARCHAR(64) NOT NULL,
    snapshot    JSONB NOT NULL,
    updated_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    PRIMARY KEY (campaign_id, system_id)
);
";
