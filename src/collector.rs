use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::download::fetch_bytes;
use crate::verify::probe_json;

/// How a run ended when it did not abort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The request never produced a body; nothing was written.
    RequestFailed(String),
    Written { bytes: usize, well_formed: bool },
}

pub struct Collector {
    config: Config,
}

impl Collector {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches the squad feed and stores the raw body.
    ///
    /// Request and JSON errors are reported and swallowed. Only a failed write
    /// is returned as an error.
    pub fn run(&self) -> Result<Outcome> {
        println!("Starting the application...");
        log::info!("Starting squad collection");

        let url = self.config.feed_url();
        let outcome = match fetch_bytes(&url) {
            Err(e) => {
                log::error!("Request to squad feed failed: {}", e);
                println!("The HTTP request failed with error {}", e);
                Outcome::RequestFailed(e.to_string())
            }
            Ok(payload) => {
                let well_formed = match probe_json(&payload) {
                    Ok(()) => true,
                    Err(e) => {
                        log::warn!("Squad feed is not a well-formed JSON object: {}", e);
                        println!("There was an error while parsing JSON {}", e);
                        false
                    }
                };

                println!("Writing the results in output file.");
                write_output(&self.config.output_path, &payload)?;
                println!("Writing results finished.");

                Outcome::Written {
                    bytes: payload.len(),
                    well_formed,
                }
            }
        };

        println!("Terminating the application...");
        log::info!("Squad collection finished: {:?}", outcome);
        Ok(outcome)
    }
}

fn write_output(path: &Path, payload: &[u8]) -> Result<()> {
    log::info!("Writing {} bytes to {:?}", payload.len(), path);

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options
        .open(path)
        .with_context(|| format!("Failed to create output file {:?}", path))?;

    file.write_all(payload)
        .with_context(|| format!("Failed to write squad data to {:?}", path))?;

    Ok(())
}
