//! HTTP API Client
//!
//! Functions for communicating with the scoring REST API.

use gloo_net::http::Request;

use crate::state::session::Session;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Local storage key for the API base URL override
const API_URL_KEY: &str = "hourglass_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Wire Types ============

/// The four houses, with the index table the log endpoint uses.
///
/// Index order (1=Slytherin .. 4=Gryffindor) is fixed by the API;
/// display order is a separate, purely presentational concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum House {
    Slytherin,
    Hufflepuff,
    Ravenclaw,
    Gryffindor,
}

impl House {
    /// Order the scoreboard cards and gauges are laid out in.
    pub const DISPLAY_ORDER: [House; 4] = [
        House::Gryffindor,
        House::Hufflepuff,
        House::Ravenclaw,
        House::Slytherin,
    ];

    /// Resolve a 1-based house index from a log entry.
    pub fn from_index(index: u8) -> Option<House> {
        match index {
            1 => Some(House::Slytherin),
            2 => Some(House::Hufflepuff),
            3 => Some(House::Ravenclaw),
            4 => Some(House::Gryffindor),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            House::Slytherin => "Slytherin",
            House::Hufflepuff => "Hufflepuff",
            House::Ravenclaw => "Ravenclaw",
            House::Gryffindor => "Gryffindor",
        }
    }

    /// CSS class and crest image stem, e.g. `gryffindor`.
    pub fn css_class(self) -> &'static str {
        match self {
            House::Slytherin => "slytherin",
            House::Hufflepuff => "hufflepuff",
            House::Ravenclaw => "ravenclaw",
            House::Gryffindor => "gryffindor",
        }
    }
}

/// Aggregate point totals, one per house. All four keys are always present;
/// totals may be negative.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct HousePoints {
    #[serde(rename = "Slytherin")]
    pub slytherin: i64,
    #[serde(rename = "Hufflepuff")]
    pub hufflepuff: i64,
    #[serde(rename = "Ravenclaw")]
    pub ravenclaw: i64,
    #[serde(rename = "Gryffindor")]
    pub gryffindor: i64,
}

impl HousePoints {
    pub fn get(&self, house: House) -> i64 {
        match house {
            House::Slytherin => self.slytherin,
            House::Hufflepuff => self.hufflepuff,
            House::Ravenclaw => self.ravenclaw,
            House::Gryffindor => self.gryffindor,
        }
    }

    /// Normalization scale for the gauges: the leading score, but never
    /// below 100 so an early-term board still renders sensibly.
    pub fn scale(&self) -> i64 {
        [
            100,
            self.slytherin,
            self.hufflepuff,
            self.ravenclaw,
            self.gryffindor,
        ]
        .into_iter()
        .max()
        .unwrap_or(100)
    }

    /// A house's share of the scale, used only to size its gauge.
    pub fn fraction(&self, house: House) -> f64 {
        self.get(house) as f64 / self.scale() as f64
    }
}

/// One point-change event from the log endpoint.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct LogEntry {
    pub id: u32,
    /// 1-based house index, see [`House::from_index`].
    pub house: u8,
    pub name: String,
    pub reason: String,
    pub points: i64,
}

impl LogEntry {
    /// Signed delta for display: awards carry an explicit `+`.
    pub fn signed_points(&self) -> String {
        if self.points > 0 {
            format!("+{}", self.points)
        } else {
            self.points.to_string()
        }
    }
}

/// Roster entry for the admin student selector.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Student {
    pub id: u32,
    pub name: String,
}

// ============ API Functions ============

/// Fetch the aggregate house scores
pub async fn fetch_houses() -> Result<HousePoints, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/houses", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Scores request failed: HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the point-change log.
///
/// The endpoint answers 404 while no points have been awarded yet; that is
/// not a failure, so it maps to `Ok(None)` rather than an error.
pub async fn fetch_logs() -> Result<Option<Vec<LogEntry>>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/students/logs", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }

    if !response.ok() {
        return Err(format!("Log request failed: HTTP {}", response.status()));
    }

    let entries: Vec<LogEntry> = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(Some(entries))
}

/// Exchange credentials for a session payload
pub async fn sign_in(username: &str, password: &str) -> Result<Session, String> {
    let api_base = get_api_base();

    let body = format!(
        "username={}&password={}",
        urlencoding::encode(username),
        urlencoding::encode(password)
    );

    let response = Request::post(&format!("{}/token", api_base))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Sign-in failed: HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Tell the API the session is over. Best-effort: the response, and any
/// failure, is ignored - the client signs out regardless.
pub async fn sign_out() {
    let api_base = get_api_base();

    let _ = Request::get(&format!("{}/logout", api_base)).send().await;
}

/// Fetch the student roster (authenticated)
pub async fn fetch_students(token: &str) -> Result<Vec<Student>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/students", api_base))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Roster request failed: HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Request path for a single-student award.
///
/// The delta travels as whatever text the operator typed; only the reason
/// is URL-encoded. Validation is the server's job.
pub fn student_award_path(student_id: u32, points: &str, reason: &str) -> String {
    format!(
        "/student/{}/{}?reason={}",
        student_id,
        points,
        urlencoding::encode(reason)
    )
}

/// Request path for a bulk award.
pub fn bulk_award_path(points: &str, reason: &str) -> String {
    format!("/students/{}?reason={}", points, urlencoding::encode(reason))
}

/// Award (or deduct) points to a single student (authenticated)
pub async fn award_student(
    token: &str,
    student_id: u32,
    points: &str,
    reason: &str,
) -> Result<(), String> {
    let api_base = get_api_base();
    let path = student_award_path(student_id, points, reason);

    let response = Request::put(&format!("{}{}", api_base, path))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Award failed: HTTP {}", response.status()));
    }

    Ok(())
}

/// Award (or deduct) points to every student named in the uploaded file
/// (authenticated). The file goes up as multipart form content, unread and
/// unvalidated by the client.
pub async fn award_students_bulk(
    token: &str,
    points: &str,
    reason: &str,
    file: &web_sys::File,
) -> Result<(), String> {
    let api_base = get_api_base();
    let path = bulk_award_path(points, reason);

    let form = web_sys::FormData::new().map_err(|e| format!("Form build error: {:?}", e))?;
    form.append_with_blob("file", file)
        .map_err(|e| format!("Form build error: {:?}", e))?;

    let response = Request::put(&format!("{}{}", api_base, path))
        .header("Authorization", &format!("Bearer {}", token))
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Bulk award failed: HTTP {}", response.status()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_index_table() {
        assert_eq!(House::from_index(1), Some(House::Slytherin));
        assert_eq!(House::from_index(2), Some(House::Hufflepuff));
        assert_eq!(House::from_index(3), Some(House::Ravenclaw));
        assert_eq!(House::from_index(4), Some(House::Gryffindor));
        assert_eq!(House::from_index(0), None);
        assert_eq!(House::from_index(5), None);
    }

    #[test]
    fn test_scale_follows_the_leader() {
        let points: HousePoints = serde_json::from_str(
            r#"{"Gryffindor":120,"Slytherin":80,"Hufflepuff":60,"Ravenclaw":100}"#,
        )
        .unwrap();

        assert_eq!(points.scale(), 120);
        assert!((points.fraction(House::Gryffindor) - 1.0).abs() < 1e-9);
        assert!((points.fraction(House::Slytherin) - 0.667).abs() < 1e-3);
    }

    #[test]
    fn test_scale_floor_is_100() {
        let points = HousePoints {
            slytherin: -20,
            hufflepuff: 0,
            ravenclaw: 35,
            gryffindor: 12,
        };

        assert_eq!(points.scale(), 100);
        assert!((points.fraction(House::Ravenclaw) - 0.35).abs() < 1e-9);
    }

    #[test]
    fn test_signed_points_formatting() {
        let mut entry = LogEntry {
            id: 1,
            house: 4,
            name: "Hermione Granger".to_string(),
            reason: "knew the answer".to_string(),
            points: 10,
        };
        assert_eq!(entry.signed_points(), "+10");

        entry.points = -15;
        assert_eq!(entry.signed_points(), "-15");

        entry.points = 0;
        assert_eq!(entry.signed_points(), "0");
    }

    #[test]
    fn test_single_award_path() {
        assert_eq!(
            student_award_path(42, "-15", "late"),
            "/student/42/-15?reason=late"
        );
    }

    #[test]
    fn test_award_paths_encode_the_reason() {
        assert_eq!(
            student_award_path(7, "10", "caught out of bed"),
            "/student/7/10?reason=caught%20out%20of%20bed"
        );
        assert_eq!(
            bulk_award_path("10", "won the match"),
            "/students/10?reason=won%20the%20match"
        );
    }

    #[test]
    fn test_points_text_passes_through_uncoerced() {
        // Bounds and numeric checks are server-side; the client forwards
        // whatever was typed.
        assert_eq!(student_award_path(1, "0", ""), "/student/1/0?reason=");
        assert_eq!(bulk_award_path("ten", "x"), "/students/ten?reason=x");
    }
}
