//! Common test utilities for solclone integration tests

use std::path::PathBuf;
use tempfile::TempDir;

pub const SOLUTION_XML: &str = r#"<ImportExportXml xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" version="9.2.24112.214" SolutionPackageVersion="9.2" languagecode="1043" generatedBy="CrmLive">
  <SolutionManifest>
    <UniqueName>Solution</UniqueName>
    <LocalizedNames>
      <LocalizedName description="Solution" languagecode="1043" />
    </LocalizedNames>
    <Descriptions>
      <Description description="" languagecode="1043" />
    </Descriptions>
    <Version>1.1.0.0</Version>
    <Managed>0</Managed>
  </SolutionManifest>
</ImportExportXml>"#;

pub const CUSTOMIZATIONS_XML: &str = r#"<ImportExportXml xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" version="9.2.24112.214" languagecode="1043" generatedBy="CrmLive">
  <CustomControls />
  <connectionreferences>
    <connectionreference connectionreferencelogicalname="eh_sharedsharepointonline_db1031">
      <connectionreferencedisplayname>SharePoint Solution-db103</connectionreferencedisplayname>
      <connectorid>/providers/Microsoft.PowerApps/apis/shared_sharepointonline</connectorid>
      <iscustomizable>1</iscustomizable>
      <statecode>0</statecode>
      <statuscode>1</statuscode>
    </connectionreference>
    <connectionreference connectionreferencelogicalname="eh_sharedtodo_f0a68">
      <connectionreferencedisplayname>Microsoft To-Do (Business) Solution-f0a68</connectionreferencedisplayname>
      <connectorid>/providers/Microsoft.PowerApps/apis/shared_todo</connectorid>
      <iscustomizable>1</iscustomizable>
      <statecode>0</statecode>
      <statuscode>1</statuscode>
    </connectionreference>
  </connectionreferences>
  <Languages>
    <Language>1043</Language>
  </Languages>
</ImportExportXml>"#;

pub const WORKFLOW_JSON: &str = r#"{
  "properties": {
    "connectionReferences": {
      "shared_sharepointonline-1": {
        "api": {
          "name": "shared_sharepointonline"
        },
        "connection": {
          "connectionReferenceLogicalName": "eh_sharedsharepointonline_db1031"
        },
        "runtimeSource": "invoker"
      },
      "shared_todo": {
        "api": {
          "name": "shared_todo"
        },
        "connection": {
          "connectionReferenceLogicalName": "eh_sharedtodo_f0a68"
        },
        "runtimeSource": "invoker"
      }
    },
    "definition": {
      "parameters": {
        "Sharepoint site (eh_Sharepointsite)": {
          "defaultValue": "",
          "type": "String",
          "metadata": {
            "schemaName": "eh_Sharepointsite"
          }
        }
      }
    }
  }
}"#;

/// Definition document for one environment variable
pub fn definition_xml(schema_name: &str) -> String {
    format!(
        r#"<environmentvariabledefinition schemaname="{schema_name}">
  <displayname default="config file">
    <label description="config file" languagecode="1043" />
  </displayname>
  <introducedversion>1.0.0.0</introducedversion>
  <iscustomizable>1</iscustomizable>
  <type>100000000</type>
</environmentvariabledefinition>"#
    )
}

/// A source solution bundle plus a destination path, in a temp directory
#[allow(dead_code)]
pub struct TestSolution {
    /// Temporary directory holding both trees
    pub temp: TempDir,
    /// Path to the source bundle root
    pub source: PathBuf,
    /// Destination path for the duplicate (not created up front)
    pub dest: PathBuf,
}

#[allow(dead_code)]
impl TestSolution {
    /// Create an empty source bundle
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let source = temp.path().join("solution");
        let dest = temp.path().join("solution_copy");
        std::fs::create_dir_all(&source).expect("Failed to create source directory");
        Self { temp, source, dest }
    }

    /// Create a source bundle with manifest, customizations, one
    /// environment variable and one workflow
    pub fn populated() -> Self {
        let solution = Self::new();
        solution.write_source("solution.xml", SOLUTION_XML);
        solution.write_source("customizations.xml", CUSTOMIZATIONS_XML);
        solution.write_source(
            "environmentvariabledefinitions/eh_Sharepointsite/environmentvariabledefinition.xml",
            &definition_xml("eh_Sharepointsite"),
        );
        solution.write_source("Workflows/SharepointFlow-1A2B.json", WORKFLOW_JSON);
        solution
    }

    /// Write a file into the source bundle
    pub fn write_source(&self, path: &str, content: &str) {
        let file_path = self.source.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write a file into the destination tree (for stale-content setups)
    pub fn write_dest(&self, path: &str, content: &str) {
        let file_path = self.dest.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the destination tree
    pub fn read_dest(&self, path: &str) -> String {
        std::fs::read_to_string(self.dest.join(path)).expect("Failed to read file")
    }

    /// Read a file from the source tree
    pub fn read_source(&self, path: &str) -> String {
        std::fs::read_to_string(self.source.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the destination tree
    pub fn dest_exists(&self, path: &str) -> bool {
        self.dest.join(path).exists()
    }
}
