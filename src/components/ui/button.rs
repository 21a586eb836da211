use leptos::prelude::*;
use leptos_ui::variants;

variants! {
    Button {
        base: "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-lg font-medium transition-colors disabled:cursor-not-allowed disabled:opacity-50 [&_svg]:pointer-events-none [&_svg]:shrink-0 outline-none focus-visible:ring-2 focus-visible:ring-blue-500 hover:cursor-pointer select-none",
        variants: {
            variant: {
                Default: "bg-blue-600 text-white hover:bg-blue-700",
                Outline: "border border-gray-300 text-gray-700 hover:bg-gray-50",
                Danger: "text-gray-600 hover:bg-red-50 hover:text-red-600",
                Icon: "text-gray-400 hover:text-blue-600",
            },
            size: {
                Default: "px-4 py-2 text-sm",
                Lg: "px-6 py-4 text-lg rounded-xl",
                Sm: "px-3 py-2 text-sm",
                Bare: "p-0",
            }
        },
        component: {
            element: button,
            support_href: true,
            support_aria_current: true
        }
    }
}
