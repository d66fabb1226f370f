// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidRole(String::from("admin"));
    assert_eq!(format!("{err}"), "Invalid role: admin");

    let err: DomainError = DomainError::InvalidApplicationStatus(String::from("pending"));
    assert_eq!(format!("{err}"), "Invalid application status: pending");

    let err: DomainError = DomainError::DisallowedFileType {
        filename: String::from("resume.exe"),
    };
    assert_eq!(
        format!("{err}"),
        "File type not allowed for 'resume.exe'. Please upload PDF, DOC, or DOCX files only."
    );

    let err: DomainError = DomainError::MissingField("title");
    assert_eq!(format!("{err}"), "Field 'title' is required");

    let err: DomainError = DomainError::InvalidDate {
        field: "deadline",
        input: String::from("31/12/2026"),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid deadline '31/12/2026' (expected YYYY-MM-DD)"
    );

    let err: DomainError = DomainError::InvalidDuration(0);
    assert_eq!(format!("{err}"), "Invalid interview duration: 0 minutes");
}
