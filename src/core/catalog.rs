//! Course catalog: the static course list and degree requirements

use crate::core::error::PlannerError;
use crate::core::models::{Course, DegreeRequirement};
use crate::core::offerings::TermOfferings;
use crate::{debug, info};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

const BUNDLED_CATALOG: &str = include_str!("../../samples/catalog/psychology.json");

/// On-disk layout of a catalog file
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    courses: Vec<Course>,
    degree_requirements: BTreeMap<String, DegreeRequirement>,
}

/// Immutable course catalog, loaded once per session
#[derive(Debug, Clone)]
pub struct CourseCatalog {
    /// Where the catalog was loaded from
    source: PathBuf,
    /// Courses in file order
    courses: Vec<Course>,
    /// Course code → position in `courses`
    index: HashMap<String, usize>,
    /// Degree id → requirement structure
    degrees: BTreeMap<String, DegreeRequirement>,
    /// Season → offered course codes
    offerings: TermOfferings,
}

impl CourseCatalog {
    /// Load a catalog from a JSON file
    ///
    /// # Errors
    /// Returns [`PlannerError::DataLoad`] if the file is missing, unreadable,
    /// malformed, or fails validation. There is no partial load.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PlannerError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| PlannerError::DataLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let catalog = Self::parse(&content, path)?;
        info!(
            "Catalog loaded from {}: {} courses, {} degrees",
            path.display(),
            catalog.courses.len(),
            catalog.degrees.len()
        );
        Ok(catalog)
    }

    /// Build a catalog from a JSON string
    ///
    /// # Errors
    /// Returns [`PlannerError::DataLoad`] if the document is malformed or invalid.
    pub fn from_json(json: &str) -> Result<Self, PlannerError> {
        Self::parse(json, Path::new("<inline>"))
    }

    /// The psychology catalog shipped with the binary
    ///
    /// # Errors
    /// Returns [`PlannerError::DataLoad`] if the bundled document is invalid.
    pub fn bundled() -> Result<Self, PlannerError> {
        let catalog = Self::parse(BUNDLED_CATALOG, Path::new("<bundled>"))?;
        debug!("Using bundled catalog: {} courses", catalog.courses.len());
        Ok(catalog)
    }

    /// Build a catalog from already-parsed parts
    ///
    /// # Errors
    /// Returns [`PlannerError::DataLoad`] on duplicate codes or zero-credit courses.
    pub fn from_parts(
        courses: Vec<Course>,
        degrees: BTreeMap<String, DegreeRequirement>,
    ) -> Result<Self, PlannerError> {
        Self::build(courses, degrees, PathBuf::from("<memory>"))
    }

    fn parse(json: &str, path: &Path) -> Result<Self, PlannerError> {
        let doc: CatalogDocument =
            serde_json::from_str(json).map_err(|e| PlannerError::DataLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Self::build(doc.courses, doc.degree_requirements, path.to_path_buf())
    }

    fn build(
        mut courses: Vec<Course>,
        degrees: BTreeMap<String, DegreeRequirement>,
        source: PathBuf,
    ) -> Result<Self, PlannerError> {
        let invalid = |reason: String| PlannerError::DataLoad {
            path: source.clone(),
            reason,
        };

        let mut index = HashMap::with_capacity(courses.len());
        for (pos, course) in courses.iter_mut().enumerate() {
            course.code = course.code.trim().to_string();
            if course.code.is_empty() {
                return Err(invalid(format!("course #{} has an empty code", pos + 1)));
            }
            if course.credits == 0 {
                return Err(invalid(format!("course '{}' has zero credits", course.code)));
            }
            course.prerequisites.retain(|expr| !expr.codes().is_empty());
            if index.insert(course.code.clone(), pos).is_some() {
                return Err(invalid(format!("duplicate course code '{}'", course.code)));
            }
        }

        let offerings = TermOfferings::build(&courses);
        let catalog = Self {
            source,
            courses,
            index,
            degrees,
            offerings,
        };

        for missing in catalog.dangling_prerequisites() {
            debug!("Prerequisite outside catalog: {missing}");
        }

        Ok(catalog)
    }

    /// Where this catalog was loaded from
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// All courses, in catalog order
    #[must_use]
    pub fn all_courses(&self) -> &[Course] {
        &self.courses
    }

    /// Exact-match lookup by course code
    #[must_use]
    pub fn find_course(&self, code: &str) -> Option<&Course> {
        self.index.get(code).map(|&pos| &self.courses[pos])
    }

    /// Lookup that treats a miss as an error
    ///
    /// # Errors
    /// Returns [`PlannerError::NotFound`] if `code` is not in the catalog.
    pub fn require_course(&self, code: &str) -> Result<&Course, PlannerError> {
        self.find_course(code)
            .ok_or_else(|| PlannerError::course_not_found(code))
    }

    /// Whether `code` is in the catalog
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Requirement structure for degree `id`
    ///
    /// # Errors
    /// Returns [`PlannerError::NotFound`] if `id` is unknown.
    pub fn degree_requirement(&self, id: &str) -> Result<&DegreeRequirement, PlannerError> {
        self.degrees
            .get(id)
            .ok_or_else(|| PlannerError::degree_not_found(id))
    }

    /// Ids of all degrees in the catalog
    pub fn degree_ids(&self) -> impl Iterator<Item = &str> {
        self.degrees.keys().map(String::as_str)
    }

    /// Season → course codes index
    #[must_use]
    pub const fn term_offerings(&self) -> &TermOfferings {
        &self.offerings
    }

    /// Prerequisite references that name courses absent from the catalog
    ///
    /// These are legal (external or retired courses); the list is informational.
    #[must_use]
    pub fn dangling_prerequisites(&self) -> Vec<String> {
        let mut missing = Vec::new();
        for course in &self.courses {
            for code in course.prerequisites.iter().flat_map(|e| e.codes()) {
                if !self.contains(code) {
                    missing.push(format!("'{}' requires unknown '{code}'", course.code));
                }
            }
        }
        missing
    }
}
