use super::*;

#[test]
fn default_resume_has_no_upload() {
    let state = ResumeState::default();
    assert!(!state.has_upload());
}

#[test]
fn download_name_prefers_the_uploaded_file_name() {
    let state = ResumeState {
        file_name: Some("cv-2024.pdf".to_owned()),
        data_url: Some("data:application/pdf;base64,AAAA".to_owned()),
    };
    assert_eq!(state.download_name("John Doe"), "cv-2024.pdf");
}

#[test]
fn download_name_falls_back_to_the_owner_name() {
    assert_eq!(
        ResumeState::default().download_name("John Doe"),
        "John_Doe_Resume.pdf"
    );
}
