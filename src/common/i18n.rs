// src/common/i18n.rs

use std::collections::HashMap;

pub const DEFAULT_LANGUAGE: &str = "en";

const EN: &[(&str, &str)] = &[
    ("validation_failed", "One or more fields are invalid."),
    ("invalid_request_body", "Invalid request format."),
    ("company_name_required", "Company name is required."),
    ("email_required", "Email address is required."),
    ("email_invalid", "Please enter a valid email address."),
    ("password_required", "Password is required."),
    ("password_too_short", "Password must be at least 6 characters."),
    ("phone_number_required", "Phone number is required."),
    ("address_required", "Address is required."),
    ("city_required", "City is required."),
    ("business_type_required", "Business category is required."),
    ("tax_number_required", "Tax number is required."),
    ("contact_person_required", "Contact person is required."),
    ("name_required", "Reservation name is required."),
    ("start_date_required", "Start date is required."),
    ("capacity_min", "Capacity must be at least 1."),
    ("days_of_week_range", "Days of week must be between 0 and 6."),
    ("occurrences_min", "Occurrence count must be at least 1."),
    ("invalid_start_date", "Invalid start date format."),
    ("invalid_end_date", "Invalid end date format."),
    ("invalid_reservation_id", "Invalid reservation ID."),
    ("email_taken", "This email address is already in use."),
    ("tax_number_taken", "This tax number is already in use."),
    ("invalid_credentials", "Invalid email or password."),
    ("invalid_token", "Invalid or missing authentication token."),
    ("reservation_not_found", "Reservation not found."),
    ("internal_error", "An unexpected error occurred."),
    ("partner_registered", "Business registered successfully."),
    ("login_successful", "Login successful."),
    ("reservation_deleted", "Reservation deleted successfully."),
];

const PT: &[(&str, &str)] = &[
    ("validation_failed", "Um ou mais campos são inválidos."),
    ("invalid_request_body", "Formato de requisição inválido."),
    ("company_name_required", "O nome da empresa é obrigatório."),
    ("email_required", "O e-mail é obrigatório."),
    ("email_invalid", "O e-mail fornecido é inválido."),
    ("password_required", "A senha é obrigatória."),
    ("password_too_short", "A senha deve ter no mínimo 6 caracteres."),
    ("phone_number_required", "O telefone é obrigatório."),
    ("address_required", "O endereço é obrigatório."),
    ("city_required", "A cidade é obrigatória."),
    ("business_type_required", "A categoria do negócio é obrigatória."),
    ("tax_number_required", "O número fiscal é obrigatório."),
    ("contact_person_required", "A pessoa de contato é obrigatória."),
    ("name_required", "O nome da reserva é obrigatório."),
    ("start_date_required", "A data de início é obrigatória."),
    ("capacity_min", "A capacidade deve ser no mínimo 1."),
    ("days_of_week_range", "Os dias da semana devem estar entre 0 e 6."),
    ("occurrences_min", "O número de repetições deve ser no mínimo 1."),
    ("invalid_start_date", "Formato de data de início inválido."),
    ("invalid_end_date", "Formato de data de fim inválido."),
    ("invalid_reservation_id", "ID de reserva inválido."),
    ("email_taken", "Este e-mail já está em uso."),
    ("tax_number_taken", "Este número fiscal já está em uso."),
    ("invalid_credentials", "E-mail ou senha inválidos."),
    ("invalid_token", "Token de autenticação inválido ou ausente."),
    ("reservation_not_found", "Reserva não encontrada."),
    ("internal_error", "Ocorreu um erro inesperado."),
    ("partner_registered", "Empresa registrada com sucesso."),
    ("login_successful", "Login realizado com sucesso."),
    ("reservation_deleted", "Reserva removida com sucesso."),
];

const TR: &[(&str, &str)] = &[
    ("validation_failed", "Doğrulama hatası."),
    ("invalid_request_body", "Geçersiz istek formatı."),
    ("company_name_required", "İşletme adı zorunludur"),
    ("email_required", "E-posta adresi zorunludur"),
    ("email_invalid", "Geçerli bir e-posta adresi giriniz"),
    ("password_required", "Şifre zorunludur"),
    ("password_too_short", "Şifre en az 6 karakter olmalıdır"),
    ("phone_number_required", "Telefon numarası zorunludur"),
    ("address_required", "Adres zorunludur"),
    ("city_required", "Şehir seçimi zorunludur"),
    ("business_type_required", "İşletme kategorisi seçimi zorunludur"),
    ("tax_number_required", "Vergi numarası zorunludur"),
    ("contact_person_required", "Yetkili kişi bilgisi zorunludur"),
    ("name_required", "Rezervasyon adı zorunludur"),
    ("start_date_required", "Başlangıç tarihi zorunludur"),
    ("capacity_min", "Kapasite en az 1 olmalıdır"),
    ("days_of_week_range", "Haftanın günleri 0 ile 6 arasında olmalıdır"),
    ("occurrences_min", "Tekrar sayısı en az 1 olmalıdır"),
    ("invalid_start_date", "Geçersiz başlangıç tarihi formatı"),
    ("invalid_end_date", "Geçersiz bitiş tarihi formatı"),
    ("invalid_reservation_id", "Geçersiz rezervasyon ID"),
    ("email_taken", "Bu e-posta adresi zaten kullanımda"),
    ("tax_number_taken", "Bu vergi numarası zaten kullanımda"),
    ("invalid_credentials", "Geçersiz email veya şifre"),
    ("invalid_token", "Geçersiz veya eksik token"),
    ("reservation_not_found", "Rezervasyon bulunamadı"),
    ("internal_error", "Beklenmeyen bir hata oluştu"),
    ("partner_registered", "İşletme başarıyla kaydedildi"),
    ("login_successful", "Giriş başarılı"),
    ("reservation_deleted", "Rezervasyon başarıyla silindi"),
];

/// Catálogo de mensagens por idioma. Montado uma vez no AppState.
#[derive(Debug)]
pub struct I18nStore {
    catalogs: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl I18nStore {
    pub fn new() -> Self {
        let catalogs = [("en", EN), ("pt", PT), ("tr", TR)]
            .into_iter()
            .map(|(lang, table)| (lang, table.iter().copied().collect()))
            .collect();
        Self { catalogs }
    }

    // idioma desconhecido -> inglês; chave desconhecida -> a própria chave
    pub fn translate(&self, lang: &str, key: &str) -> String {
        self.lookup(lang, key)
            .or_else(|| self.lookup(DEFAULT_LANGUAGE, key))
            .unwrap_or(key)
            .to_string()
    }

    fn lookup(&self, lang: &str, key: &str) -> Option<&'static str> {
        self.catalogs.get(lang)?.get(key).copied()
    }
}

impl Default for I18nStore {
    fn default() -> Self {
        Self::new()
    }
}
