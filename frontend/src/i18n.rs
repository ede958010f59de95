//! Bilingual labels for the application chrome.
//!
//! Only the strings the UI itself needs live here; record content arrives
//! from the API already in the requested language.

use client::locale::UiLang;

pub fn tr(lang: UiLang, key: &str) -> String {
    let label = match lang {
        UiLang::En => match key {
            "nav_search" => "Search the archive",
            "nav_collections" => "Collections",
            "nav_login" => "Login",
            "nav_user_management" => "User management",
            "archive_text_search_query_placeholder" => "Search records...",
            "archive_url_filter_placeholder" => "Filter by source URL...",
            "archive_date_from_filter" => "From",
            "archive_date_to_filter" => "To",
            "archive_filter_private_records" => "Private records",
            "archive_no_records_found" => "No records found",
            "archive_pagination_page" => "Page ",
            "archive_pagination_page_out_of" => " of ",
            "inclusive" => "Match any subject",
            "exclusive" => "Match all subjects",
            "collections_title" => "Collections",
            "collections_empty" => "No collections yet",
            "collection_view_button" => "View collection",
            "record_not_found" => "Record not found",
            "subjects_autocomplete_search_subjects" => "Search subjects...",
            "subjects_autocomplete_no_subjects_found" => "No subjects found",
            "subjects_autocomplete_create" => "Create",
            "subjects_autocomplete_error_fetching_subjects" => "Could not load subjects",
            "subjects_autocomplete_error_creating_subject" => "Could not create the subject",
            "subjects_autocomplete_error_deleting_subject" => "Could not delete the subject",
            "users_title" => "User management",
            "users_email_filter_placeholder" => "Filter by email...",
            "users_create" => "Create user",
            "users_save" => "Save",
            "users_delete" => "Delete",
            "users_active" => "Active",
            "users_error_create" => "Could not create the user",
            "users_error_update" => "Could not update the user",
            "users_error_delete" => "Could not delete the user",
            "login_title" => "Login",
            "login_email" => "Email",
            "login_password" => "Password",
            "login_submit" => "Sign in",
            "login_failed" => "Login failed",
            "home_tagline" => "A living memory of Sudan, preserved in the open",
            "not_found" => "This page does not exist",
            _ => key,
        },
        UiLang::Ar => match key {
            "nav_search" => "البحث في الأرشيف",
            "nav_collections" => "المجموعات",
            "nav_login" => "تسجيل الدخول",
            "nav_user_management" => "إدارة المستخدمين",
            "archive_text_search_query_placeholder" => "ابحث في السجلات...",
            "archive_url_filter_placeholder" => "تصفية حسب رابط المصدر...",
            "archive_date_from_filter" => "من",
            "archive_date_to_filter" => "إلى",
            "archive_filter_private_records" => "سجلات خاصة",
            "archive_no_records_found" => "لا توجد سجلات",
            "archive_pagination_page" => "صفحة ",
            "archive_pagination_page_out_of" => " من ",
            "inclusive" => "مطابقة أي موضوع",
            "exclusive" => "مطابقة كل المواضيع",
            "collections_title" => "المجموعات",
            "collections_empty" => "لا توجد مجموعات بعد",
            "collection_view_button" => "عرض المجموعة",
            "record_not_found" => "السجل غير موجود",
            "subjects_autocomplete_search_subjects" => "ابحث في المواضيع...",
            "subjects_autocomplete_no_subjects_found" => "لا توجد مواضيع",
            "subjects_autocomplete_create" => "إنشاء",
            "subjects_autocomplete_error_fetching_subjects" => "تعذر تحميل المواضيع",
            "subjects_autocomplete_error_creating_subject" => "تعذر إنشاء الموضوع",
            "subjects_autocomplete_error_deleting_subject" => "تعذر حذف الموضوع",
            "users_title" => "إدارة المستخدمين",
            "users_email_filter_placeholder" => "تصفية حسب البريد الإلكتروني...",
            "users_create" => "إنشاء مستخدم",
            "users_save" => "حفظ",
            "users_delete" => "حذف",
            "users_active" => "نشط",
            "users_error_create" => "تعذر إنشاء المستخدم",
            "users_error_update" => "تعذر تحديث المستخدم",
            "users_error_delete" => "تعذر حذف المستخدم",
            "login_title" => "تسجيل الدخول",
            "login_email" => "البريد الإلكتروني",
            "login_password" => "كلمة المرور",
            "login_submit" => "دخول",
            "login_failed" => "فشل تسجيل الدخول",
            "home_tagline" => "ذاكرة حية للسودان، محفوظة للجميع",
            "not_found" => "هذه الصفحة غير موجودة",
            _ => key,
        },
    };
    label.to_string()
}

/// The language-toggle button shows the language you would switch to.
pub fn toggle_label(lang: UiLang) -> &'static str {
    match lang {
        UiLang::En => "عربي",
        UiLang::Ar => "English",
    }
}
