use crate::component::course::{normalize_code, Course};
use crate::config::Config;
use crate::index::bst::BinarySearchTree;
use crate::index::tree::Tree;
use crate::session::response::Response;
use crate::storage::file::{File, FileError};

/// One user's catalog session: the course index plus the settings it was
/// started with.
#[derive(Debug)]
pub struct Session {
    pub config: Config,
    pub courses: BinarySearchTree<Course>,
}

impl Session {
    pub fn new(config: Config) -> Session {
        Session {
            config,
            courses: BinarySearchTree::new(),
        }
    }

    /// Load the configured source into the index
    pub fn load(&mut self) -> Response {
        let path = self.config.course_file.clone();
        match File::load_courses(&path, &mut self.courses) {
            Ok(summary) => {
                let mut msg = String::new();
                for (line, e) in summary.skipped.iter() {
                    msg.push_str(&format!("Bad record skipped (line {}: {})\n", line, e));
                }
                msg.push_str(&format!("{} courses loaded", self.courses.len()));
                Response::OK { msg }
            }
            Err(e @ FileError::SourceUnreadable(_)) => Response::Error { msg: format!("{}", e) },
            Err(e) => Response::Error {
                msg: format!("{}, {} courses loaded", e, self.courses.len()),
            },
        }
    }

    /// All courses sorted by code
    pub fn list(&self) -> Response {
        if self.config.json {
            let courses: Vec<&Course> = self.courses.iter().collect();
            return match serde_json::to_string_pretty(&courses) {
                Ok(msg) => Response::OK { msg },
                Err(e) => Response::Error { msg: format!("{}", e) },
            };
        }
        if self.courses.is_empty() {
            return Response::ok("No courses loaded");
        }
        let lines: Vec<String> = self.courses.iter().map(|c| c.summary()).collect();
        Response::OK { msg: lines.join("\n") }
    }

    pub fn find(&self, input: &str) -> Response {
        let code = normalize_code(input);
        match self.courses.search(&code) {
            Some(course) if self.config.json => match serde_json::to_string_pretty(course) {
                Ok(msg) => Response::OK { msg },
                Err(e) => Response::Error { msg: format!("{}", e) },
            },
            Some(course) => Response::OK {
                msg: format!("{}", course),
            },
            None => Response::error("Not found"),
        }
    }

    pub fn remove(&mut self, input: &str) -> Response {
        let code = normalize_code(input);
        if self.courses.delete(&code) {
            Response::OK {
                msg: format!("{} removed", code),
            }
        } else {
            Response::Error {
                msg: format!("{} not found", code),
            }
        }
    }
}
