use crate::menu::DayRecord;

/// Render one day as the HTML-annotated message sent to subscribers.
pub fn format_day_message(day: &DayRecord, month: &str) -> String {
    let mut message = format!(
        "🍽️ <b>Menú d'avui - {} {} de {}</b>\n\n",
        day.weekday, day.day, month
    );
    if !day.notes.is_empty() {
        message.push_str(&format!("📝 <i>{}</i>\n\n", day.notes.join(", ")));
    }
    message.push_str(&format!("🥣 <b>Primer plat:</b> {}\n\n", day.first_course));
    message.push_str(&format!("🍖 <b>Segon plat:</b> {}\n\n", day.second_course));
    message.push_str(&format!("🍨 <b>Postre:</b> {}\n\n", day.dessert));
    message.push_str("Bon profit! 😋");
    message
}
