use {
    crate::{
        error::FeeError,
        vectors::{TestVector, TestVectorDocument},
    },
    log::info,
    std::{fs, path::Path},
};

/// Render the fixture as pretty JSON with two-space indentation and no
/// trailing newline.
pub fn to_json(doc: &TestVectorDocument) -> Result<String, FeeError> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Write the fixture to `path`, replacing any existing file.
///
/// Parent directories are not created; a missing directory is reported as
/// [`FeeError::Io`].
pub fn write_document(path: &Path, doc: &TestVectorDocument) -> Result<(), FeeError> {
    let json = to_json(doc)?;
    fs::write(path, json).map_err(|source| FeeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} test vectors to {}", doc.vectors.len(), path.display());
    Ok(())
}

/// Load a fixture previously written by [`write_document`].
pub fn read_document(path: &Path) -> Result<TestVectorDocument, FeeError> {
    let json = fs::read_to_string(path).map_err(|source| FeeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&json)?)
}

/// Check that the fixture at `path` is exactly what `expected` renders to.
///
/// A file that is not a fixture at all is [`FeeError::Json`]. A file whose
/// records fail [`TestVectorDocument::verify`] reports the first bad record.
/// Anything else that differs (order, count, constants, formatting) is
/// [`FeeError::StaleFixture`].
pub fn check_document(path: &Path, expected: &TestVectorDocument) -> Result<(), FeeError> {
    let on_disk = fs::read_to_string(path).map_err(|source| FeeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if on_disk == to_json(expected)? {
        info!("{} is up to date", path.display());
        return Ok(());
    }

    let doc: TestVectorDocument = serde_json::from_str(&on_disk)?;
    doc.verify()?;
    Err(FeeError::StaleFixture {
        path: path.to_path_buf(),
    })
}

/// Fixed-width console line for one vector.
pub fn summary_line(vector: &TestVector) -> String {
    format!(
        "Number of withdrawal requests: {:2} for excess of {:4} (Base fee: {:16} wei) -> Expected fee: {:16} wei",
        vector.number_of_withdrawal_requests,
        vector.base_excess,
        vector.base_fee,
        vector.expected_fee,
    )
}

/// Print the vector count and one [`summary_line`] per vector to stdout.
pub fn print_summary(doc: &TestVectorDocument) {
    println!("Generated {} test vectors", doc.vectors.len());
    for vector in &doc.vectors {
        println!("{}", summary_line(vector));
    }
}
