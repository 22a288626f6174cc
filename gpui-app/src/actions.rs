use gpui::actions;

// Navigation actions
actions!(navigation, [
    Back,
]);

// Editor actions
actions!(editor, [
    SaveTemplate,
]);

// App actions
actions!(app_menu, [
    ShowAbout,
    ToggleAppearance,
]);
