use anyhow::Result;
use drunksched_core::Event;
use drunksched_core::store::EventStore;

pub fn run(store: &dyn EventStore, event: &Event) -> Result<()> {
    store.delete(&event.id)?;
    println!("Deleted {} ({})", event.event_name, event.id);
    Ok(())
}
