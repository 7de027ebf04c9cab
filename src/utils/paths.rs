use crate::proto::generated_proto::common::DeletePacerConfig;

use anyhow::anyhow;

#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;

/// Directory holding the storage engine files to account for.
pub fn data_directory(config: &DeletePacerConfig) -> anyhow::Result<String> {
    let data_directory = config
        .stringConfigs
        .get("data_directory")
        .ok_or(anyhow!("data_directory is a required config"))?
        .trim_end_matches('/')
        .to_string();

    if data_directory.is_empty() {
        return Err(anyhow!("data_directory cannot be empty or the filesystem root"));
    }

    Ok(data_directory)
}

/// Whether files under the data directory live on local media.
/// Defaults to local when unset.
pub fn data_directory_is_local(config: &DeletePacerConfig) -> bool {
    config
        .booleanConfigs
        .get("data_directory_is_local")
        .copied()
        .unwrap_or(true)
}
