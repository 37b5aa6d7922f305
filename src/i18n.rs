//! User-facing strings for each supported locale.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR", alias = "pt-br", alias = "pt")]
    #[value(name = "pt-br")]
    PtBr,
    #[serde(rename = "en", alias = "en-US", alias = "en-us")]
    #[value(name = "en")]
    En,
}

/// Every piece of text the dashboard shows, for one locale.
pub struct Strings {
    pub app_title: &'static str,
    pub month_names: [&'static str; 12],
    pub section_titles: SectionTitles,
    pub light_mode: &'static str,
    pub dark_mode: &'static str,
    pub stat_flashcards: &'static str,
    pub stat_images: &'static str,
    pub stat_events: &'static str,
    pub stat_study_time: &'static str,
    pub upcoming_events_title: &'static str,
    pub no_upcoming_events: &'static str,
    pub no_flashcards: &'static str,
    pub no_images: &'static str,
    pub no_notes: &'static str,
    pub calendar_in_development: &'static str,
    pub flashcards_in_development: &'static str,
    pub gallery_in_development: &'static str,
    pub notes_in_development: &'static str,
    pub add_flashcard: &'static str,
    pub add_image: &'static str,
    pub add_note: &'static str,
    pub send: &'static str,
    pub chat_placeholder: &'static str,
    pub canned_reply: &'static str,
    pub pomodoro_today: &'static str,
    pub pomodoro_total: &'static str,
    pub pomodoro_last_date: &'static str,
    pub notice_title: &'static str,
    pub dismiss_hint: &'static str,
    pub menu: &'static str,
    pub close: &'static str,
    pub footer_hint: &'static str,
    pub footer_hint_chat: &'static str,
    pub help_title: &'static str,
    pub help_lines: [&'static str; 7],
}

pub struct SectionTitles {
    pub dashboard: &'static str,
    pub flashcards: &'static str,
    pub gallery: &'static str,
    pub calendar: &'static str,
    pub chat: &'static str,
    pub timer: &'static str,
    pub notes: &'static str,
}

const PT_BR: Strings = Strings {
    app_title: "Painel de Estudos",
    month_names: [
        "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho", "Julho", "Agosto",
        "Setembro", "Outubro", "Novembro", "Dezembro",
    ],
    section_titles: SectionTitles {
        dashboard: "Início",
        flashcards: "Flashcards",
        gallery: "Galeria",
        calendar: "Calendário",
        chat: "Chat IA",
        timer: "Pomodoro",
        notes: "Anotações",
    },
    light_mode: "Modo Claro",
    dark_mode: "Modo Escuro",
    stat_flashcards: "Flashcards",
    stat_images: "Imagens",
    stat_events: "Eventos",
    stat_study_time: "Tempo de estudo",
    upcoming_events_title: "Próximos eventos",
    no_upcoming_events: "Nenhum evento próximo",
    no_flashcards: "Nenhum flashcard ainda. Clique em \"Criar Flashcard\" para começar!",
    no_images: "Nenhuma imagem ainda. Clique em \"Adicionar Imagem\" para começar!",
    no_notes: "Nenhuma anotação ainda. Clique em \"Nova Anotação\" para começar!",
    calendar_in_development: "Calendário em desenvolvimento!",
    flashcards_in_development: "Funcionalidade de flashcards em desenvolvimento!",
    gallery_in_development: "Funcionalidade de galeria em desenvolvimento!",
    notes_in_development: "Funcionalidade de anotações em desenvolvimento!",
    add_flashcard: "Criar Flashcard",
    add_image: "Adicionar Imagem",
    add_note: "Nova Anotação",
    send: "Enviar",
    chat_placeholder: "Digite sua mensagem (Enter envia, Shift+Enter ou Alt+Enter quebra linha)",
    canned_reply: "Olá! Sou sua assistente de enfermagem. Como posso ajudar?",
    pomodoro_today: "Sessões hoje",
    pomodoro_total: "Sessões no total",
    pomodoro_last_date: "Última sessão",
    notice_title: "Aviso",
    dismiss_hint: "Esc para fechar",
    menu: "Menu",
    close: "Fechar",
    footer_hint: "1-7/Tab: seções  t: tema  m: menu  a: adicionar  ?: ajuda  q: sair",
    footer_hint_chat: "Tab: próxima seção  Ctrl+T: tema  Ctrl+B: menu  F1: ajuda  Esc: sair do chat  Ctrl+C: sair",
    help_title: "Ajuda",
    help_lines: [
        "1-7 ou Tab / Shift+Tab: trocar de seção",
        "t ou Ctrl+T: alternar tema claro/escuro",
        "m ou Ctrl+B: abrir o menu lateral",
        "a: adicionar item em Flashcards, Galeria, Anotações",
        "Chat: Enter envia, Shift+Enter ou Alt+Enter quebra linha, PgUp/PgDn rolam",
        "Mouse: clique em qualquer botão, clique fora de um aviso para fechá-lo",
        "q ou Ctrl+C: sair",
    ],
};

const EN: Strings = Strings {
    app_title: "Study Dashboard",
    month_names: [
        "January", "February", "March", "April", "May", "June", "July", "August",
        "September", "October", "November", "December",
    ],
    section_titles: SectionTitles {
        dashboard: "Home",
        flashcards: "Flashcards",
        gallery: "Gallery",
        calendar: "Calendar",
        chat: "AI Chat",
        timer: "Pomodoro",
        notes: "Notes",
    },
    light_mode: "Light Mode",
    dark_mode: "Dark Mode",
    stat_flashcards: "Flashcards",
    stat_images: "Images",
    stat_events: "Events",
    stat_study_time: "Study time",
    upcoming_events_title: "Upcoming events",
    no_upcoming_events: "No upcoming events",
    no_flashcards: "No flashcards yet. Click \"Create Flashcard\" to get started!",
    no_images: "No images yet. Click \"Add Image\" to get started!",
    no_notes: "No notes yet. Click \"New Note\" to get started!",
    calendar_in_development: "Calendar under development!",
    flashcards_in_development: "Flashcards feature under development!",
    gallery_in_development: "Gallery feature under development!",
    notes_in_development: "Notes feature under development!",
    add_flashcard: "Create Flashcard",
    add_image: "Add Image",
    add_note: "New Note",
    send: "Send",
    chat_placeholder: "Type your message (Enter sends, Shift+Enter or Alt+Enter for a new line)",
    canned_reply: "Hi! I'm your nursing assistant. How can I help?",
    pomodoro_today: "Sessions today",
    pomodoro_total: "Sessions total",
    pomodoro_last_date: "Last session",
    notice_title: "Notice",
    dismiss_hint: "Press Esc to dismiss",
    menu: "Menu",
    close: "Close",
    footer_hint: "1-7/Tab: sections  t: theme  m: menu  a: add  ?: help  q: quit",
    footer_hint_chat: "Tab: next section  Ctrl+T: theme  Ctrl+B: menu  F1: help  Esc: leave chat  Ctrl+C: quit",
    help_title: "Help",
    help_lines: [
        "1-7 or Tab / Shift+Tab: switch section",
        "t or Ctrl+T: toggle light/dark theme",
        "m or Ctrl+B: open the sidebar menu",
        "a: add item in Flashcards, Gallery, Notes",
        "Chat: Enter sends, Shift+Enter or Alt+Enter new line, PgUp/PgDn scroll",
        "Mouse: click any button, click outside a popup to close it",
        "q or Ctrl+C: quit",
    ],
};

impl Locale {
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::PtBr => &PT_BR,
            Locale::En => &EN,
        }
    }

    /// Month name for a zero-based month index; `None` outside 0..=11.
    pub fn month_name(self, month0: u32) -> Option<&'static str> {
        self.strings().month_names.get(month0 as usize).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_table_is_zero_indexed() {
        assert_eq!(Locale::PtBr.month_name(0), Some("Janeiro"));
        assert_eq!(Locale::PtBr.month_name(11), Some("Dezembro"));
        assert_eq!(Locale::En.month_name(2), Some("March"));
        assert_eq!(Locale::En.month_name(12), None);
    }

    #[test]
    fn locale_parses_from_config_names() {
        #[derive(Deserialize)]
        struct Wrap {
            locale: Locale,
        }
        let w: Wrap = toml::from_str("locale = \"pt-BR\"").unwrap();
        assert_eq!(w.locale, Locale::PtBr);
        let w: Wrap = toml::from_str("locale = \"en\"").unwrap();
        assert_eq!(w.locale, Locale::En);
    }
}
