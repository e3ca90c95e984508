//! SQLite-backed slot over the `kv_slots` table.

use super::{DurableSlot, SlotResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Durable slot persisted in a migrated SQLite database.
pub struct SqliteSlot {
    conn: Connection,
}

impl SqliteSlot {
    /// Wraps a connection returned by `db::open_db` / `db::open_db_in_memory`.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl DurableSlot for SqliteSlot {
    fn read(&self, key: &str) -> SlotResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT slot_value FROM kv_slots WHERE slot_key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&mut self, key: &str, value: &str) -> SlotResult<()> {
        self.conn.execute(
            "INSERT INTO kv_slots (slot_key, slot_value)
             VALUES (?1, ?2)
             ON CONFLICT(slot_key) DO UPDATE SET
                slot_value = excluded.slot_value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SqliteSlot;
    use crate::db::open_db_in_memory;
    use crate::slot::DurableSlot;

    #[test]
    fn upsert_overwrites_existing_value() {
        let mut slot = SqliteSlot::new(open_db_in_memory().unwrap());
        assert_eq!(slot.read("employees").unwrap(), None);

        slot.write("employees", "[]").unwrap();
        slot.write("employees", "[{}]").unwrap();

        assert_eq!(slot.read("employees").unwrap().as_deref(), Some("[{}]"));
        let rows: i64 = slot
            .connection()
            .query_row("SELECT COUNT(*) FROM kv_slots;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }
}
