use js_sys::Reflect;
use log::trace;
use serde::Serialize;
use wasm_bindgen::JsValue;
use crate::errors::XiError;
use crate::memory::{GlobalMemory, RawSection};

fn memory_access_error(e: JsValue) -> XiError {
    XiError::MemoryAccess(format!("{:?}", e))
}

/// The game's `Memory` object.
fn memory_root() -> Result<JsValue, XiError> {
    Reflect::get(&js_sys::global(), &JsValue::from_str("Memory")).map_err(memory_access_error)
}

/// Entries of a section of `Memory`, left unparsed so that each can be checked on its own.
fn load_section(root: &JsValue, key: &str) -> Result<RawSection, XiError> {
    let value = Reflect::get(root, &JsValue::from_str(key)).map_err(memory_access_error)?;
    if value.is_undefined() || value.is_null() {
        Ok(RawSection::default())
    } else {
        serde_wasm_bindgen::from_value(value).map_err(|e| XiError::MemoryAccess(format!("{}: {}", key, e)))
    }
}

/// Reads sources, bases and rooms from `Memory`. Malformed entries are skipped.
pub fn load_memory() -> Result<GlobalMemory, XiError> {
    let root = memory_root()?;
    let memory = GlobalMemory::from_raw_sections(
        load_section(&root, "sources")?,
        load_section(&root, "bases")?,
        load_section(&root, "rooms")?,
    );
    trace!(
        "Loaded memory with {} sources, {} bases and {} rooms.",
        memory.sources.len(),
        memory.bases.len(),
        memory.rooms.len()
    );
    Ok(memory)
}

/// Writes the container state of each source back to `Memory`. Other parts of the memory are
/// only read by the planners and left as they are.
pub fn save_containers(memory: &GlobalMemory) -> Result<(), XiError> {
    let root = memory_root()?;
    let sources = Reflect::get(&root, &JsValue::from_str("sources")).map_err(memory_access_error)?;
    if sources.is_undefined() || sources.is_null() {
        return Ok(());
    }
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    for (id, source) in memory.sources.iter() {
        let source_obj = Reflect::get(&sources, &JsValue::from_str(id)).map_err(memory_access_error)?;
        if source_obj.is_undefined() || source_obj.is_null() {
            continue;
        }
        let container = source
            .container
            .serialize(&serializer)
            .map_err(|e| XiError::MemoryAccess(format!("container of {}: {}", id, e)))?;
        Reflect::set(&source_obj, &JsValue::from_str("container"), &container).map_err(memory_access_error)?;
    }
    Ok(())
}
