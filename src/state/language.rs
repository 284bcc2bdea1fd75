//! Bilingual label tables

use serde::{Deserialize, Serialize};

/// Display language of the sign-in card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ko,
}

impl Language {
    pub fn toggle(&self) -> Self {
        match self {
            Self::En => Self::Ko,
            Self::Ko => Self::En,
        }
    }

    /// Label table for this language
    pub fn pack(&self) -> &'static LanguagePack {
        match self {
            Self::En => &ENGLISH,
            Self::Ko => &KOREAN,
        }
    }

    /// Name shown in the language chooser (not translated)
    pub fn label(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ko => "Korean",
        }
    }
}

/// Fixed mapping of UI label keys to display strings
#[derive(Debug, PartialEq, Eq)]
pub struct LanguagePack {
    pub sign_in: &'static str,
    pub contact: &'static str,
    pub password: &'static str,
    pub forgot: &'static str,
    pub create: &'static str,
    pub sign: &'static str,
    pub select: &'static str,
    pub help: &'static str,
    pub privacy: &'static str,
    pub terms: &'static str,
    pub password_validation: &'static str,
    pub email_validation: &'static str,
    pub phone_validation: &'static str,
    /// Success notice; `{name}` is replaced by the returned display name
    pub welcome: &'static str,
    pub submit_failed: &'static str,
    pub error_title: &'static str,
    /// Shortcut help line descriptions
    pub hint_next: &'static str,
    pub hint_reveal: &'static str,
    pub hint_theme: &'static str,
    pub hint_language: &'static str,
    pub hint_quit: &'static str,
}

impl LanguagePack {
    pub fn welcome_message(&self, name: &str) -> String {
        self.welcome.replace("{name}", name)
    }
}

pub static ENGLISH: LanguagePack = LanguagePack {
    sign_in: "Sign in",
    contact: "Email or Phone",
    password: "Password",
    forgot: "Forgot Password?",
    create: "Create an Account",
    sign: "Sign In",
    select: "Select Language",
    help: "Help",
    privacy: "Privacy",
    terms: "Terms",
    password_validation: "Your password must be at least 6 characters long",
    email_validation: "Please enter your email in the correct format",
    phone_validation: "Your phone number must have between 8 and 15 digits",
    welcome: "Welcome, {name}!",
    submit_failed: "Sign in failed. Please try again.",
    error_title: "Error",
    hint_next: "next",
    hint_reveal: "show password",
    hint_theme: "theme",
    hint_language: "language",
    hint_quit: "quit",
};

pub static KOREAN: LanguagePack = LanguagePack {
    sign_in: "가입",
    contact: "이메일 주소 또는 전화번호",
    password: "비밀번호",
    forgot: "비밀 번호 찾기",
    create: "계좌 만들기",
    sign: "가입 하기",
    select: "언어 선택",
    help: "도움",
    privacy: "프라이버시",
    terms: "조건",
    password_validation: "6자리 이상 입력해 주세요",
    email_validation: "잘못된 이메일 방식입니다",
    phone_validation: "숫자 8에서 15까지 입력해 주세요",
    welcome: "{name}님, 환영합니다!",
    submit_failed: "로그인에 실패했습니다. 다시 시도해 주세요.",
    error_title: "오류",
    hint_next: "다음",
    hint_reveal: "비밀번호 보기",
    hint_theme: "테마",
    hint_language: "언어",
    hint_quit: "종료",
};
