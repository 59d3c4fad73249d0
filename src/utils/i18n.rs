// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Idiomas disponibles en el selector
pub const SUPPORTED_LANGUAGES: &[&str] = &["KO", "EN"];

pub fn is_supported(lang: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|l| l.eq_ignore_ascii_case(lang))
}

/// Obtener diccionario de traducciones para un idioma (desconocido -> KO)
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let entries: &[(&str, &str)] = match lang.to_uppercase().as_str() {
        "EN" => &[
            // Cabecera / navegación
            ("titulo_app", "FabLab Seat Reservation"),
            ("nav_asientos", "Seats"),
            ("nav_avisos", "Notices"),
            ("nav_mis_reservas", "My reservations"),
            ("nav_login", "Log in"),
            ("cargando", "Loading..."),

            // Formularios
            ("iniciar_sesion", "Log in"),
            ("registrarse", "Sign up"),
            ("cambiar_contrasena", "Reset password"),
            ("recuperar_cuenta", "Recover account"),
            ("numero_estudiante", "Student ID"),
            ("nombre", "Name"),
            ("email", "Email"),
            ("contrasena", "Password"),
            ("contrasena_actual", "Current password"),
            ("nueva_contrasena", "New password"),
            ("codigo_verificacion", "Verification code"),
            ("enviar_codigo", "Send code"),
            ("verificar", "Verify"),
            ("verificado", "Verified"),

            // Asientos / perfil
            ("seleccion_asiento", "Choose a seat"),
            ("asiento_seleccionado", "Selected seat"),
            ("asientos_libres", "Free seats"),
            ("reservar", "Reserve"),
            ("salir_asiento", "Check out"),
            ("mi_informacion", "My information"),
            ("guardar_cambios", "Save changes"),
            ("cerrar_sesion", "Log out"),
            ("darse_de_baja", "Delete account"),
            ("confirmar_baja", "Do you really want to delete your account?"),

            // Avisos / reservas
            ("avisos", "Notices"),
            ("numero", "No."),
            ("titulo", "Title"),
            ("fecha", "Date"),
            ("vistas", "Views"),
            ("autor", "Author"),
            ("sin_avisos", "No notices yet."),
            ("volver_lista", "Back to list"),
            ("mis_reservas", "My reservations"),
            ("estado", "Status"),
            ("fecha_reserva", "Reserved at"),
            ("asiento", "Seat"),
            ("motivo_cancelacion", "Checkout reason"),
            ("sin_reservas", "No reservations yet."),
            ("reserva_activa", "In use"),
            ("reserva_terminada", "Ended"),

            // Mensajes de éxito
            ("login_exitoso", "Welcome, [ {name} ]! You are logged in."),
            ("codigo_enviado", "A verification code was sent to your email!"),
            ("verificacion_completa", "Verification code confirmed!"),
            ("registro_exitoso", "Your account was created successfully!"),
            ("password_cambiado", "Your password was changed successfully."),
            ("cuenta_recuperada", "Your account has been recovered. Please log in."),
            ("reserva_exitosa", "Your seat is reserved."),
            ("salida_exitosa", "You have checked out of your seat."),
            ("logout_exitoso", "You have been logged out."),
            ("baja_exitosa", "Your account has been deleted."),

            // Errores
            ("campos_vacios", "Please enter your student ID and password."),
            ("verificacion_requerida", "Please complete email verification."),
            ("cambio_email_requiere_verificacion", "Changing your email requires verification."),
            ("login_requerido", "Please log in first."),
            ("seleccione_asiento", "Please choose a seat."),
            ("asiento_ya_reservado", "This seat is already reserved."),
            ("sesion_expirada", "Your session has expired. Please log in again."),
            ("error_desconocido", "Unknown error"),
            ("error_inesperado", "An unexpected error occurred. Please try again later."),
            ("error_csrf", "Security token error: please try again."),
            ("error_generico", "Something went wrong."),
            ("error_registro", "Sign-up failed"),
            ("error_salida", "Something went wrong while checking out."),
            ("error_logout", "An error occurred while logging out. Please try again."),
            ("error_baja", "An error occurred while deleting your account. Please try again."),
            ("error_carga_asientos", "Could not load seats"),
            ("error_carga_avisos", "Could not load notices"),
            ("error_carga_reservas", "Could not load reservations"),
            ("error_carga_usuario", "Could not load your information"),
            ("fallo_login", "Login failed"),
            ("fallo_envio_email", "Failed to send email"),
            ("fallo_verificacion", "Verification failed"),
            ("fallo_cambio_password", "Password reset failed"),
            ("fallo_reserva", "Reservation failed.\nReason"),
            ("fallo_logout", "Logout failed."),
            ("fallo_baja", "Account deletion failed."),
        ],
        _ => &[
            // Cabecera / navegación
            ("titulo_app", "FabLab 좌석 예약"),
            ("nav_asientos", "좌석"),
            ("nav_avisos", "공지사항"),
            ("nav_mis_reservas", "내 예약"),
            ("nav_login", "로그인"),
            ("cargando", "불러오는 중..."),

            // Formularios
            ("iniciar_sesion", "로그인"),
            ("registrarse", "회원가입"),
            ("cambiar_contrasena", "비밀번호 재설정"),
            ("recuperar_cuenta", "계정 복구"),
            ("numero_estudiante", "학번"),
            ("nombre", "이름"),
            ("email", "이메일"),
            ("contrasena", "비밀번호"),
            ("contrasena_actual", "현재 비밀번호"),
            ("nueva_contrasena", "새 비밀번호"),
            ("codigo_verificacion", "인증번호"),
            ("enviar_codigo", "인증번호 요청"),
            ("verificar", "인증번호 확인"),
            ("verificado", "인증 완료"),

            // Asientos / perfil
            ("seleccion_asiento", "좌석 선택"),
            ("asiento_seleccionado", "선택한 좌석"),
            ("asientos_libres", "남은 좌석"),
            ("reservar", "예약하기"),
            ("salir_asiento", "퇴실하기"),
            ("mi_informacion", "내 정보"),
            ("guardar_cambios", "정보 수정"),
            ("cerrar_sesion", "로그아웃"),
            ("darse_de_baja", "계정 탈퇴"),
            ("confirmar_baja", "정말로 계정을 탈퇴하시겠습니까?"),

            // Avisos / reservas
            ("avisos", "공지사항"),
            ("numero", "번호"),
            ("titulo", "제목"),
            ("fecha", "작성일자"),
            ("vistas", "조회수"),
            ("autor", "작성자"),
            ("sin_avisos", "공지사항이 없습니다."),
            ("volver_lista", "목록으로"),
            ("mis_reservas", "내 예약 정보"),
            ("estado", "예약상태"),
            ("fecha_reserva", "예약일시"),
            ("asiento", "좌석"),
            ("motivo_cancelacion", "퇴실사유"),
            ("sin_reservas", "예약 내역이 없습니다."),
            ("reserva_activa", "사용중"),
            ("reserva_terminada", "퇴실"),

            // Mensajes de éxito
            ("login_exitoso", "[ {name} ]님 로그인에 성공했습니다!"),
            ("codigo_enviado", "인증번호가 이메일로 발송되었습니다!"),
            ("verificacion_completa", "인증번호 확인 완료!"),
            ("registro_exitoso", "회원가입이 성공적으로 완료되었습니다!"),
            ("password_cambiado", "비밀번호가 성공적으로 변경되었습니다."),
            ("cuenta_recuperada", "계정이 복구되었습니다. 다시 로그인해 주세요."),
            ("reserva_exitosa", "좌석 예약이 완료되었습니다."),
            ("salida_exitosa", "좌석 퇴실이 성공적으로 완료되었습니다."),
            ("logout_exitoso", "로그아웃이 성공적으로 완료되었습니다."),
            ("baja_exitosa", "계정이 성공적으로 탈퇴되었습니다."),

            // Errores
            ("campos_vacios", "학번과 비밀번호를 입력해 주세요."),
            ("verificacion_requerida", "이메일 인증을 완료해주세요."),
            ("cambio_email_requiere_verificacion", "이메일 변경 시 인증이 필요합니다."),
            ("login_requerido", "로그인이 필요합니다."),
            ("seleccione_asiento", "좌석을 선택해주세요."),
            ("asiento_ya_reservado", "이미 예약된 좌석입니다."),
            ("sesion_expirada", "세션이 만료되었습니다. 다시 로그인해주세요."),
            ("error_desconocido", "알 수 없는 오류"),
            ("error_inesperado", "예기치 않은 오류가 발생했습니다. 나중에 다시 시도해 주세요."),
            ("error_csrf", "CSRF 토큰 오류: 요청을 다시 시도해 주세요."),
            ("error_generico", "오류가 발생했습니다."),
            ("error_registro", "Error"),
            ("error_salida", "퇴실 처리 중 오류가 발생했습니다."),
            ("error_logout", "로그아웃 중 오류가 발생했습니다. 다시 시도해 주세요."),
            ("error_baja", "계정 탈퇴 중 오류가 발생했습니다. 다시 시도해 주세요."),
            ("error_carga_asientos", "좌석 데이터를 불러오지 못했습니다"),
            ("error_carga_avisos", "공지사항 데이터를 불러오는 중 오류가 발생했습니다"),
            ("error_carga_reservas", "예약 정보를 불러오지 못했습니다"),
            ("error_carga_usuario", "사용자 정보를 불러오지 못했습니다"),
            ("fallo_login", "로그인 실패"),
            ("fallo_envio_email", "이메일 전송 실패"),
            ("fallo_verificacion", "인증 실패"),
            ("fallo_cambio_password", "비밀번호 변경 실패"),
            ("fallo_reserva", "예약에 실패했습니다.\n원인"),
            ("fallo_logout", "로그아웃 처리에 실패했습니다."),
            ("fallo_baja", "계정 탈퇴 처리에 실패했습니다."),
        ],
    };

    entries.iter().copied().collect()
}

/// Función de traducción: la clave si no hay traducción
pub fn t(key: &str, lang: &str) -> String {
    get_translations(lang)
        .get(key)
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_languages_have_same_keys() {
        let mut ko: Vec<_> = get_translations("KO").into_keys().collect();
        let mut en: Vec<_> = get_translations("EN").into_keys().collect();
        ko.sort_unstable();
        en.sort_unstable();
        assert_eq!(ko, en);
    }

    #[test]
    fn test_lookup_and_fallbacks() {
        assert_eq!(t("login_requerido", "KO"), "로그인이 필요합니다.");
        assert_eq!(t("login_requerido", "en"), "Please log in first.");
        assert_eq!(t("login_requerido", "FR"), "로그인이 필요합니다.");
        assert_eq!(t("no_such_key", "EN"), "no_such_key");
        assert!(is_supported("ko"));
        assert!(!is_supported("FR"));
    }
}
