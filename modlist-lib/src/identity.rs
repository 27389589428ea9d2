//! Local identity of a candidate: what the mod says about itself.

use modlist_core::ModRecord;

use crate::archive;
use crate::descriptor::Descriptor;
use crate::error::ReadError;
use crate::scanner::{Candidate, CandidateKind};
use crate::source::{self, SourceFields};

/// Identity fields every manifest record is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalIdentity {
    pub mod_id: String,
    pub name: String,
    pub version: String,
    /// Empty when the mod declares none
    pub description: String,
}

impl LocalIdentity {
    /// Identity from a normalized archive descriptor.
    ///
    /// `modid`, `name` and `version` are required; `description` is not.
    pub fn from_descriptor(descriptor: &Descriptor) -> Result<Self, ReadError> {
        let mod_id = descriptor.text("modid");
        let name = descriptor.text("name");
        let version = descriptor.text("version");

        match (mod_id, name, version) {
            (Some(mod_id), Some(name), Some(version)) => Ok(Self {
                mod_id,
                name,
                version,
                description: descriptor.text("description").unwrap_or_default(),
            }),
            (mod_id, name, version) => Err(ReadError::FieldExtractionIncomplete(missing_fields(
                &[("modid", mod_id.is_some()), ("name", name.is_some()), ("version", version.is_some())],
            ))),
        }
    }

    /// Identity from scraped source fields.
    ///
    /// Version, side and namespace are all required, and the namespace
    /// must yield a non-empty catalog id. The namespace doubles as the name.
    pub fn from_source(fields: &SourceFields) -> Result<Self, ReadError> {
        let mod_id = fields.mod_id();
        match (&fields.version, &fields.side, &fields.namespace, mod_id) {
            (Some(version), Some(_), Some(namespace), Some(mod_id)) => Ok(Self {
                mod_id,
                name: namespace.clone(),
                version: version.clone(),
                description: fields.description.clone().unwrap_or_default(),
            }),
            (version, side, namespace, mod_id) => {
                Err(ReadError::FieldExtractionIncomplete(missing_fields(&[
                    ("version", version.is_some()),
                    ("side", side.is_some()),
                    ("namespace", namespace.is_some()),
                    ("modid", mod_id.is_some() || namespace.is_none()),
                ])))
            }
        }
    }

    /// Baseline manifest record with placeholder side and URLs.
    pub fn baseline_record(&self) -> ModRecord {
        ModRecord::local(&self.name, &self.version, &self.mod_id, &self.description)
    }
}

fn missing_fields(checks: &[(&'static str, bool)]) -> Vec<&'static str> {
    checks
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect()
}

/// Read a candidate's local identity, dispatching on its kind.
///
/// Performs blocking file I/O.
pub fn read_candidate(candidate: &Candidate) -> Result<LocalIdentity, ReadError> {
    match candidate.kind {
        CandidateKind::Archive => {
            let descriptor = archive::read_archive_descriptor(&candidate.path)?;
            LocalIdentity::from_descriptor(&descriptor)
        }
        CandidateKind::Source => {
            let fields = source::read_source_fields(&candidate.path)?;
            LocalIdentity::from_source(&fields)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_identity() {
        let d = Descriptor::parse(r#"{"modid": "foo", "name": "Foo", "version": "1.0.0"}"#).unwrap();
        let id = LocalIdentity::from_descriptor(&d).unwrap();
        assert_eq!(id.mod_id, "foo");
        assert_eq!(id.name, "Foo");
        assert_eq!(id.version, "1.0.0");
        assert_eq!(id.description, "");
    }

    #[test]
    fn test_descriptor_null_field_counts_as_missing() {
        let d = Descriptor::parse(r#"{"modid": null, "name": "Foo", "version": "1.0.0"}"#).unwrap();
        let err = LocalIdentity::from_descriptor(&d).unwrap_err();
        match err {
            ReadError::FieldExtractionIncomplete(missing) => assert_eq!(missing, vec!["modid"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_descriptor_reports_all_missing_fields() {
        let d = Descriptor::parse(r#"{"description": "only this"}"#).unwrap();
        match LocalIdentity::from_descriptor(&d).unwrap_err() {
            ReadError::FieldExtractionIncomplete(missing) => {
                assert_eq!(missing, vec!["modid", "name", "version"])
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_source_identity() {
        let fields = SourceFields::parse(
            r#"[assembly: ModInfo("X", Side = "Client", Version = "0.4.1", Description = "Tweaks")]
namespace CoolTweaks {}"#,
        );
        let id = LocalIdentity::from_source(&fields).unwrap();
        assert_eq!(id.mod_id, "cooltweaks");
        assert_eq!(id.name, "CoolTweaks");
        assert_eq!(id.version, "0.4.1");
        assert_eq!(id.description, "Tweaks");
    }

    #[test]
    fn test_source_only_version_is_incomplete() {
        let fields = SourceFields::parse(r#"Version = "2.3""#);
        match LocalIdentity::from_source(&fields).unwrap_err() {
            ReadError::FieldExtractionIncomplete(missing) => {
                assert_eq!(missing, vec!["side", "namespace"])
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_source_description_is_optional() {
        let fields = SourceFields::parse(r#"Side = "Both" Version = "1" namespace Abc"#);
        let id = LocalIdentity::from_source(&fields).unwrap();
        assert_eq!(id.description, "");
    }

    #[test]
    fn test_baseline_record() {
        let id = LocalIdentity {
            mod_id: "foo".into(),
            name: "Foo".into(),
            version: "1.0.0".into(),
            description: "d".into(),
        };
        let record = id.baseline_record();
        assert_eq!(record.mod_id, "foo");
        assert!(record.is_local_only());
        assert_eq!(record.side, "Unknown");
    }
}
