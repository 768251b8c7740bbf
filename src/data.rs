use crate::names::{DayNames, LocaleData, MonthNames};

pub static EN: LocaleData = LocaleData {
    months: MonthNames {
        full:  [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ],
        short: [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ],
    },
    days:   DayNames {
        full:    [
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
        ],
        short:   ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        minimal: ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
    },
};

pub static RU: LocaleData = LocaleData {
    months: MonthNames {
        full:  [
            "Январь",
            "Февраль",
            "Март",
            "Апрель",
            "Май",
            "Июнь",
            "Июль",
            "Август",
            "Сентябрь",
            "Октябрь",
            "Ноябрь",
            "Декабрь",
        ],
        short: [
            "Янв", "Фев", "Мар", "Апр", "Май", "Июн", "Июл", "Авг", "Сен", "Окт", "Ноя", "Дек",
        ],
    },
    days:   DayNames {
        full:    [
            "Воскресенье",
            "Понедельник",
            "Вторник",
            "Среда",
            "Четверг",
            "Пятница",
            "Суббота",
        ],
        short:   ["Вс", "Пн", "Вт", "Ср", "Чт", "Пт", "Сб"],
        // Russian calendars use the two-letter form for both
        minimal: ["Вс", "Пн", "Вт", "Ср", "Чт", "Пт", "Сб"],
    },
};
